//! TUI View Components
//!
//! Ratatui widgets that draw view models. Views take a reference to a view
//! model and do no filtering or formatting of their own beyond layout.
//! Layout helpers are public so the renderer can hit-test mouse clicks
//! against the same rectangles it drew.

pub mod card;
pub mod card_grid;
pub mod chart;
pub mod modal;
pub mod search_bar;
pub mod status_bar;

pub use card::{CardView, SkeletonCardView};
pub use card_grid::{CardGridView, GridLayout, layout_grid};
pub use chart::ChartView;
pub use modal::{ModalLayout, ModalView, layout_modal};
pub use search_bar::{SearchBarLayout, SearchBarView, layout_search_bar};
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Accent used for selection, focus and chart bars
pub(crate) const ACCENT: Color = Color::Rgb(139, 92, 246);

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
