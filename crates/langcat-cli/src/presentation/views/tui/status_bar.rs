//! Status Bar View Component
//!
//! Renders the bottom status bar with result counts and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!(
                "Showing {} of {} ",
                self.model.shown, self.model.total
            )),
            Span::raw("| "),
            Span::styled(&self.model.status_message, Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
        let help_line = Line::from(vec![
            key("[/]"),
            Span::raw("search "),
            key("[↵]"),
            Span::raw("details "),
            key("[c]"),
            Span::raw("hart "),
            key("[^U]"),
            Span::raw("clear "),
            key("[q]"),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
