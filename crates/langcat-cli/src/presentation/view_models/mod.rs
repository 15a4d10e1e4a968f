pub mod card_grid;
pub mod chart;
pub mod common;
pub mod modal;
pub mod screen;

pub use card_grid::{CardGridViewModel, CardViewModel};
pub use chart::{BarViewModel, ChartViewModel};
pub use common::StatusLevel;
pub use modal::ModalViewModel;
pub use screen::{Focus, ScreenViewModel, SearchBarViewModel, StatusBarViewModel};
