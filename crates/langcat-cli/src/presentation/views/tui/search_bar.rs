//! Search Bar View Component
//!
//! Query input with a clear control on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::SearchBarViewModel;

use super::ACCENT;

pub const CLEAR_LABEL: &str = "[Clear]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarLayout {
    pub input: Rect,
    pub clear_button: Rect,
}

pub fn layout_search_bar(area: Rect) -> SearchBarLayout {
    let [input, clear_button] = Layout::horizontal([
        Constraint::Min(10),
        Constraint::Length(CLEAR_LABEL.len() as u16 + 2),
    ])
    .areas(area);

    SearchBarLayout {
        input,
        clear_button,
    }
}

pub struct SearchBarView<'a> {
    model: &'a SearchBarViewModel,
}

impl<'a> SearchBarView<'a> {
    pub fn new(model: &'a SearchBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = layout_search_bar(area);

        let border_style = if self.model.focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        let mut block = Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(border_style);
        if self.model.pending {
            block = block.title(Line::from("…").right_aligned());
        }

        let mut spans = Vec::new();
        if self.model.query.is_empty() && !self.model.focused {
            spans.push(Span::styled(
                self.model.placeholder.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        } else {
            spans.push(Span::raw(self.model.query.as_str()));
        }
        if self.model.focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(layout.input, buf);

        Paragraph::new(Span::styled(
            CLEAR_LABEL,
            Style::default().fg(Color::Yellow),
        ))
        .block(Block::default().borders(Borders::ALL))
        .render(layout.clear_button, buf);
    }
}
