use super::{CardGridViewModel, ChartViewModel, ModalViewModel, StatusLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    Grid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBarViewModel {
    pub query: String,
    pub placeholder: String,
    pub focused: bool,
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarViewModel {
    pub shown: usize,
    pub total: usize,
    pub status_message: String,
    pub status_level: StatusLevel,
}

/// Everything the TUI draws in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewModel {
    pub search_bar: SearchBarViewModel,
    pub grid: CardGridViewModel,
    pub selected: Option<usize>,
    pub chart: Option<ChartViewModel>,
    pub modal: Option<ModalViewModel>,
    pub status_bar: StatusBarViewModel,
}
