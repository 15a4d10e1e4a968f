//! Card View Component
//!
//! One catalog card, plus the grey placeholder drawn while loading.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::CardViewModel;

use super::ACCENT;

pub struct CardView<'a> {
    model: &'a CardViewModel,
    selected: bool,
}

impl<'a> CardView<'a> {
    pub fn new(model: &'a CardViewModel) -> Self {
        Self {
            model,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let [image, description, year, link] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let image_text = if self.model.image_url.is_empty() {
            "▣ (no image)".to_string()
        } else {
            format!("▣ {}", self.model.image_url)
        };
        Paragraph::new(Span::styled(
            image_text,
            Style::default().add_modifier(Modifier::DIM),
        ))
        .render(image, buf);

        Paragraph::new(self.model.description.as_str())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        Paragraph::new(self.model.release_line.as_str()).render(year, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", self.model.link_label),
                Style::default().fg(ACCENT),
            ),
            Span::styled(
                self.model.link.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]))
        .render(link, buf);
    }
}

/// Grey placeholder card; `phase` alternates the shade to suggest a pulse
pub struct SkeletonCardView {
    phase: bool,
}

impl SkeletonCardView {
    pub fn new(phase: bool) -> Self {
        Self { phase }
    }
}

impl Widget for SkeletonCardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let shade = if self.phase {
            Color::DarkGray
        } else {
            Color::Gray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let bar = |pct: usize| "█".repeat(width * pct / 100);

        let lines = vec![
            Line::from(Span::styled(bar(60), Style::default().fg(shade))),
            Line::from(""),
            Line::from(Span::styled(bar(100), Style::default().fg(shade))),
            Line::from(Span::styled(bar(80), Style::default().fg(shade))),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
