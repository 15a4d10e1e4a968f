pub mod card_grid;
pub mod chart;
pub mod modal;

pub use card_grid::{
    EMPTY_MESSAGE, LOAD_ERROR_MESSAGE, present_card, present_cards, present_load_error,
    present_skeleton,
};
pub use chart::present_chart;
pub use modal::present_modal;
