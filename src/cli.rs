//! CLI interface for Tally.
//!
//! With no subcommand, Tally opens the terminal calculator. The
//! subcommands are non-interactive: labels in, display out.
//!
//! - `tally eval 7 + 3 =` feeds each label to the calculator as a key press.
//! - `tally keys` lists the buttons and their keyboard bindings.

mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::calculator::Calculator;
use crate::config::Config;
use crate::model::{Button, CalculatorState, History};
use crate::{logging, tui};

use format::{format_history, format_key_table};

/// Tally — a calculator with a running history.
#[derive(Debug, Parser)]
#[command(name = "tally", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file to use instead of `~/.tally/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const USAGE_HELP: &str = r"Examples:
  tally                          open the calculator
  tally eval 7 + 3 =             prints 10
  tally eval --history 2 + 3 x 4 =
  tally eval --json -- 5 0 % -/+

Labels: 0-9 . + - x ÷ = AC -/+ %
Stand-ins: * for x, / for ÷, c for AC, n for -/+";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Press a sequence of buttons and print the display.
    ///
    /// Each label is one key press. Put flags before the labels, or
    /// separate them with `--`.
    Eval {
        /// Print the history after the display.
        #[arg(long)]
        history: bool,

        /// Print display, state, and history as JSON.
        #[arg(long, conflicts_with = "history")]
        json: bool,

        /// Button labels, e.g. `7 + 3 =`.
        #[arg(required = true, allow_hyphen_values = true)]
        labels: Vec<String>,
    },

    /// List the buttons and the keys bound to them.
    Keys,
}

/// Everything `eval --json` prints.
#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    display: String,
    state: &'a CalculatorState,
    history: &'a History,
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| e.to_string())?;

    match cli.command {
        None => cmd_tui(&config),
        Some(Command::Eval {
            history,
            json,
            labels,
        }) => {
            logging::init_stderr(&config.log_filter);
            cmd_eval(&labels, history, json)
        }
        Some(Command::Keys) => {
            for line in format_key_table() {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn cmd_tui(config: &Config) -> Result<(), String> {
    let log_file = config
        .log_file()
        .ok_or("could not determine home directory for the log file")?;
    let _guard = logging::init_file(&log_file, &config.log_filter)
        .map_err(|e| format!("failed to open log file {}: {e}", log_file.display()))?;

    tui::run(config).map_err(|e| e.to_string())
}

fn cmd_eval(labels: &[String], history: bool, json: bool) -> Result<(), String> {
    let buttons = parse_buttons(labels)?;
    let calculator = evaluate(&buttons);

    if json {
        let report = EvalReport {
            display: calculator.rendered(),
            state: calculator.state(),
            history: calculator.history(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize result: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", calculator.rendered());
    if history {
        for line in format_history(calculator.history()) {
            println!("{line}");
        }
    }
    Ok(())
}

fn parse_buttons(labels: &[String]) -> Result<Vec<Button>, String> {
    labels
        .iter()
        .map(|label| label.parse::<Button>().map_err(|e| e.to_string()))
        .collect()
}

/// Press every button in order. Faults are reported on stderr and the
/// sequence carries on from the reset state.
fn evaluate(buttons: &[Button]) -> Calculator {
    let mut calculator = Calculator::new();
    for (i, &button) in buttons.iter().enumerate() {
        if let Err(e) = calculator.screen_tap(button) {
            eprintln!("Error at press {} ({button}): {e}", i + 1);
        }
    }
    calculator
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn labels(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn eval_accepts_hyphen_labels() {
        let cli = Cli::try_parse_from(["tally", "eval", "--history", "9", "-", "4", "-/+", "="]).unwrap();
        match cli.command {
            Some(Command::Eval {
                history, labels, ..
            }) => {
                assert!(history);
                assert_eq!(labels, ["9", "-", "4", "-/+", "="]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_runs_the_sequence() {
        let buttons = parse_buttons(&labels("7 + 3 =")).unwrap();
        let calculator = evaluate(&buttons);

        assert_eq!(calculator.rendered(), "10");
        assert_eq!(calculator.history().len(), 1);
    }

    #[test]
    fn evaluate_continues_after_a_fault() {
        let buttons = parse_buttons(&labels("5 ÷ 0 = 2 + 2 =")).unwrap();
        let calculator = evaluate(&buttons);

        assert_eq!(calculator.rendered(), "4");
        assert_eq!(calculator.history().len(), 1);
    }

    #[test]
    fn unknown_label_is_reported() {
        let err = parse_buttons(&labels("7 ^ 2")).unwrap_err();
        assert_eq!(err, "unknown button '^'");
    }

    #[test]
    fn report_serializes() {
        let calculator = evaluate(&parse_buttons(&labels("6 x 7 =")).unwrap());
        let report = EvalReport {
            display: calculator.rendered(),
            state: calculator.state(),
            history: calculator.history(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["display"], "42");
        assert_eq!(json["state"]["display"], "42.0");
        assert_eq!(json["history"][0]["symbol"], "x");
    }
}
