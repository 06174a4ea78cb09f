//! Keypad screen: the display panel and the button grid.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::calculator::Calculator;
use crate::display;
use crate::model::{Button, CalcError, Digit};
use crate::tui::palette;

const ROW_COUNT: usize = 5;

/// Button rows, top to bottom.
const ROWS: [&[Button]; ROW_COUNT] = [
    &[Button::Clear, Button::SignToggle, Button::Percent, Button::Add],
    &[
        Button::Digit(Digit::ALL[7]),
        Button::Digit(Digit::ALL[8]),
        Button::Digit(Digit::ALL[9]),
        Button::Subtract,
    ],
    &[
        Button::Digit(Digit::ALL[4]),
        Button::Digit(Digit::ALL[5]),
        Button::Digit(Digit::ALL[6]),
        Button::Multiply,
    ],
    &[
        Button::Digit(Digit::ALL[1]),
        Button::Digit(Digit::ALL[2]),
        Button::Digit(Digit::ALL[3]),
        Button::Divide,
    ],
    &[Button::Digit(Digit::ALL[0]), Button::Decimal, Button::Equals],
];

/// Height of one key, borders included.
const KEY_HEIGHT: u16 = 3;

/// Terminal rows per display point size.
const POINTS_PER_ROW: u16 = 16;

pub struct KeypadScreen {
    calculator: Calculator,
    last_pressed: Option<Button>,
    fault: Option<CalcError>,
}

impl KeypadScreen {
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            last_pressed: None,
            fault: None,
        }
    }

    /// Press a key. A fault stays visible until the next press.
    pub fn press(&mut self, button: Button) {
        self.last_pressed = Some(button);
        self.fault = self.calculator.screen_tap(button).err();
    }

    pub fn clear_history(&mut self) {
        self.calculator.clear_history();
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn fault(&self) -> Option<&CalcError> {
        self.fault.as_ref()
    }

    /// Rows the display panel takes, scaled from the display font size.
    fn display_height(&self) -> u16 {
        let len = self.calculator.display().chars().count();
        display::font_size(len) / POINTS_PER_ROW
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        #[allow(clippy::cast_possible_truncation)]
        let keypad_height = ROW_COUNT as u16 * KEY_HEIGHT;

        let chunks = Layout::vertical([
            Constraint::Length(1),                      // header
            Constraint::Min(0),                         // spacer
            Constraint::Length(self.display_height()), // display
            Constraint::Length(keypad_height),          // keys
            Constraint::Length(1),                      // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);

        // Header: history count, and the fault when there is one.
        let mut header = vec![Span::styled(
            format!(" history ({})", self.calculator.history().len()),
            Style::default().fg(palette::OPERATOR),
        )];
        if let Some(fault) = self.fault() {
            header.push(Span::styled(
                format!("  Error: {fault}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

        self.render_display(frame, chunks[2]);

        let rows = Layout::vertical([Constraint::Length(KEY_HEIGHT); ROW_COUNT]).split(chunks[3]);
        for (row, buttons) in rows.iter().zip(ROWS) {
            self.render_row(frame, *row, buttons);
        }

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " 0-9 . + - * / enter  % percent  n sign  esc clear  h history  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[4]);
    }

    fn render_display(&self, frame: &mut Frame, area: Rect) {
        let [_, line] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let text = Paragraph::new(Line::from(Span::styled(
            format!("{} ", self.calculator.rendered()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(text, line);
    }

    fn render_row(&self, frame: &mut Frame, area: Rect, buttons: &[Button]) {
        // The zero key is double width.
        let constraints = buttons.iter().map(|b| match b {
            Button::Digit(d) if u8::from(*d) == 0 => Constraint::Fill(2),
            _ => Constraint::Fill(1),
        });
        let cells = Layout::horizontal(constraints).split(area);

        for (cell, button) in cells.iter().zip(buttons) {
            let pressed = self.last_pressed == Some(*button);
            let border = if pressed {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Black)
            };
            let mut label = Style::default().fg(palette::label_color(*button));
            if pressed {
                label = label.add_modifier(Modifier::BOLD);
            }

            let key = Paragraph::new(Line::from(Span::styled(button.label(), label)))
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(border)
                        .style(Style::default().bg(palette::key_color(*button))),
                );
            frame.render_widget(key, *cell);
        }
    }
}
