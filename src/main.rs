mod calculator;
mod cli;
mod config;
mod display;
mod logging;
mod model;
mod tui;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
