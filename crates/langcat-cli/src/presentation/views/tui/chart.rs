//! Chart View Component
//!
//! Horizontal popularity bars. Bar lengths are scaled against the zero-based
//! axis maximum; the legend is only drawn when the view model asks for it.

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

use crate::presentation::view_models::ChartViewModel;

use super::ACCENT;

/// Integer resolution of bar values (BarChart only takes u64)
const VALUE_SCALE: f64 = 100.0;

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * VALUE_SCALE).round() as u64
}

pub struct ChartView<'a> {
    model: &'a ChartViewModel,
}

impl<'a> ChartView<'a> {
    pub fn new(model: &'a ChartViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL);
        if self.model.show_legend {
            block = block.title_bottom(Line::from(self.model.legend.as_str()).right_aligned());
        }

        let bars: Vec<Bar> = self
            .model
            .bars
            .iter()
            .map(|bar| {
                Bar::default()
                    .value(scaled(bar.value))
                    .label(Line::from(bar.label.as_str()))
                    .text_value(bar.value_text.clone())
                    .style(Style::default().fg(ACCENT))
                    .value_style(
                        Style::default()
                            .fg(Color::White)
                            .bg(ACCENT)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        let direction = if self.model.horizontal {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };

        BarChart::default()
            .block(block)
            .direction(direction)
            .bar_width(1)
            .bar_gap(0)
            .max(scaled(self.model.axis_max).max(1))
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
