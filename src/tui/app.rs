//! Application loop and screen routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::config::Config;
use crate::model::Button;

use super::screens::{HistoryScreen, KeypadScreen};

/// Which screen is currently displayed.
enum Screen {
    Keypad,
    History(HistoryScreen),
}

/// Runs the TUI event loop until the user quits.
pub fn run(config: &Config) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &Config) -> io::Result<()> {
    // The keypad owns the calculator, so it lives for the whole session.
    let mut keypad = KeypadScreen::new();
    let mut screen = if config.open_history {
        Screen::History(HistoryScreen::new())
    } else {
        Screen::Keypad
    };
    info!("session started");

    loop {
        terminal.draw(|frame| match &screen {
            Screen::Keypad => keypad.render(frame),
            Screen::History(h) => h.render(frame, keypad.calculator().history()),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match &mut screen {
                Screen::Keypad => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('h') => screen = Screen::History(HistoryScreen::new()),
                    KeyCode::Enter => keypad.press(Button::Equals),
                    KeyCode::Esc | KeyCode::Delete => keypad.press(Button::Clear),
                    KeyCode::Char(c) => {
                        if let Some(button) = Button::from_key(c) {
                            keypad.press(button);
                        }
                    }
                    _ => {}
                },
                Screen::History(h) => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Esc | KeyCode::Char('h') => screen = Screen::Keypad,
                    KeyCode::Up | KeyCode::Char('k') => h.on_scroll_up(),
                    KeyCode::Down | KeyCode::Char('j') => h.on_scroll_down(),
                    KeyCode::Char('x') => {
                        keypad.clear_history();
                        h.reset_scroll();
                    }
                    _ => {}
                },
            }
        }
    }

    info!(
        calculations = keypad.calculator().history().len(),
        "session ended"
    );
    Ok(())
}
