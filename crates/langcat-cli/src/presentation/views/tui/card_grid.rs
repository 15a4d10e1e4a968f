//! Card Grid View Component
//!
//! Lays cards out in as many columns as fit and draws the visible rows.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::CardGridViewModel;

use super::{CardView, SkeletonCardView};

/// Narrowest a card may get before the grid drops a column
pub const CARD_MIN_WIDTH: u16 = 28;

/// Card height including borders
pub const CARD_HEIGHT: u16 = 7;

/// Placement of tiles within the grid's inner area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows_visible: usize,
    /// (tile index, rectangle) for every tile on screen
    pub tiles: Vec<(usize, Rect)>,
}

impl GridLayout {
    /// Tile under a terminal cell, if any
    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        self.tiles
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(index, _)| *index)
    }
}

pub fn columns_for(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).max(1) as usize
}

/// Compute tile rectangles for `tile_count` tiles starting at `first_row`
pub fn layout_grid(area: Rect, tile_count: usize, first_row: usize) -> GridLayout {
    let columns = columns_for(area.width);
    let rows_visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let card_width = area.width / columns as u16;

    let start = first_row * columns;
    let end = tile_count.min((first_row + rows_visible) * columns);

    let tiles = (start..end)
        .map(|index| {
            let row = (index / columns - first_row) as u16;
            let col = (index % columns) as u16;
            let y_offset = row * CARD_HEIGHT;
            let rect = Rect::new(
                area.x + col * card_width,
                area.y + y_offset,
                card_width,
                CARD_HEIGHT.min(area.height.saturating_sub(y_offset)),
            );
            (index, rect)
        })
        .collect();

    GridLayout {
        columns,
        rows_visible,
        tiles,
    }
}

pub fn grid_block(model: &CardGridViewModel) -> Block<'static> {
    let title = match model {
        CardGridViewModel::Cards { cards } => format!("Languages ({})", cards.len()),
        CardGridViewModel::Skeleton { .. } => "Languages (loading)".to_string(),
        CardGridViewModel::Empty { .. } | CardGridViewModel::Error { .. } => {
            "Languages".to_string()
        }
    };
    Block::default().title(title).borders(Borders::ALL)
}

pub struct CardGridView<'a> {
    model: &'a CardGridViewModel,
    layout: &'a GridLayout,
    selected: Option<usize>,
    pulse: bool,
}

impl<'a> CardGridView<'a> {
    pub fn new(model: &'a CardGridViewModel, layout: &'a GridLayout) -> Self {
        Self {
            model,
            layout,
            selected: None,
            pulse: false,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = pulse;
        self
    }
}

impl<'a> Widget for CardGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = grid_block(self.model);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.model {
            CardGridViewModel::Empty { message } => {
                Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            CardGridViewModel::Error { message } => {
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            CardGridViewModel::Skeleton { .. } => {
                for (_, rect) in &self.layout.tiles {
                    SkeletonCardView::new(self.pulse).render(*rect, buf);
                }
            }
            CardGridViewModel::Cards { cards } => {
                for (index, rect) in &self.layout.tiles {
                    if let Some(card) = cards.get(*index) {
                        CardView::new(card)
                            .selected(self.selected == Some(*index))
                            .render(*rect, buf);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for(10), 1);
        assert_eq!(columns_for(56), 2);
        assert_eq!(columns_for(90), 3);
    }

    #[test]
    fn test_layout_grid_places_visible_rows() {
        let area = Rect::new(1, 1, 84, 14);
        let layout = layout_grid(area, 9, 0);

        assert_eq!(layout.columns, 3);
        assert_eq!(layout.rows_visible, 2);
        assert_eq!(layout.tiles.len(), 6);
        assert_eq!(layout.tiles[0], (0, Rect::new(1, 1, 28, 7)));
        assert_eq!(layout.tiles[4], (4, Rect::new(29, 8, 28, 7)));
    }

    #[test]
    fn test_layout_grid_scrolls() {
        let area = Rect::new(0, 0, 84, 14);
        let layout = layout_grid(area, 9, 1);

        let indices: Vec<usize> = layout.tiles.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(layout.tiles[0].1.y, 0);
    }

    #[test]
    fn test_tile_at() {
        let layout = layout_grid(Rect::new(0, 0, 56, 7), 2, 0);
        assert_eq!(layout.tile_at(0, 0), Some(0));
        assert_eq!(layout.tile_at(30, 3), Some(1));
        assert_eq!(layout.tile_at(30, 7), None);
    }
}
