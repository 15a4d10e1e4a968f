//! Modal View Component
//!
//! Centered detail panel drawn over a dimmed backdrop.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ModalViewModel;

use super::ACCENT;

pub const CLOSE_LABEL: &str = "[x]";

/// Where the modal and its close control sit on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub content: Rect,
    pub close_button: Rect,
}

impl ModalLayout {
    pub fn in_content(&self, column: u16, row: u16) -> bool {
        self.content.contains(Position::new(column, row))
    }

    pub fn on_close_button(&self, column: u16, row: u16) -> bool {
        self.close_button.contains(Position::new(column, row))
    }
}

/// Center a 60% x 60% panel (at least 40x10, clipped to the screen)
pub fn layout_modal(area: Rect) -> ModalLayout {
    let width = (area.width * 3 / 5).max(40).min(area.width);
    let height = (area.height * 3 / 5).max(10).min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [content] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let label_width = CLOSE_LABEL.len() as u16;
    let close_button = Rect::new(
        (content.x + content.width).saturating_sub(label_width + 1),
        content.y,
        label_width.min(content.width),
        1,
    );

    ModalLayout {
        content,
        close_button,
    }
}

pub struct ModalView<'a> {
    model: &'a ModalViewModel,
}

impl<'a> ModalView<'a> {
    pub fn new(model: &'a ModalViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ModalView<'a> {
    /// `area` is the full screen; the backdrop is dimmed and the panel centered
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

        let layout = layout_modal(area);
        Clear.render(layout.content, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title(Line::from(CLOSE_LABEL).right_aligned());

        let image = if self.model.image_url.is_empty() {
            "▣ (no image)".to_string()
        } else {
            format!("▣ {}", self.model.image_url)
        };

        let lines = vec![
            Line::from(Span::styled(
                image,
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.model.release_line.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.model.description.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{}: ", self.model.link_label),
                    Style::default().fg(ACCENT),
                ),
                Span::styled(
                    self.model.link.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .style(Style::default().remove_modifier(Modifier::DIM))
            .render(layout.content, buf);
    }
}
