//! History screen: completed calculations, newest at the bottom.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::model::History;
use crate::tui::palette;

pub struct HistoryScreen {
    /// Lines scrolled up from the bottom.
    scroll_offset: usize,
}

impl HistoryScreen {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn on_scroll_up(&mut self) {
        self.scroll_offset += 1;
    }

    pub fn on_scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Back to the newest entries, e.g. after the history was cleared.
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn render(&self, frame: &mut Frame, history: &History) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // entries
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);

        let title = Paragraph::new(Line::from(vec![Span::styled(
            "History",
            Style::default()
                .fg(palette::OPERATOR)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let content_padding = Block::default().padding(Padding::new(2, 2, 0, 0));
        let inner = content_padding.inner(chunks[1]);

        let lines = format_history(history);
        let content = if lines.is_empty() {
            Paragraph::new(Line::from(Span::styled("No calculations yet", muted)))
                .alignment(Alignment::Center)
        } else {
            let visible = visible_window(lines.len(), inner.height as usize, self.scroll_offset);
            let lines: Vec<Line> = lines[visible]
                .iter()
                .map(|s| Line::from(Span::styled(s.as_str(), Style::default().fg(Color::White))))
                .collect();
            Paragraph::new(lines).alignment(Alignment::Right)
        };
        frame.render_widget(content.block(content_padding), chunks[1]);

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ scroll  x clear history  esc back  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[2]);
    }
}

/// The range of lines to show: anchored to the bottom, shifted up by `offset`.
fn visible_window(total: usize, height: usize, offset: usize) -> std::ops::Range<usize> {
    let max_offset = total.saturating_sub(height);
    let offset = offset.min(max_offset);
    let end = total - offset;
    end.saturating_sub(height)..end
}

/// Format history entries into displayable lines, a blank line between entries.
fn format_history(history: &History) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in history.entries().iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(entry.to_string().lines().map(str::to_string));
    }
    lines
}
