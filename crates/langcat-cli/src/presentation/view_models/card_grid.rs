use langcat_types::Item;
use serde::Serialize;

/// One card in the grid, bound by value to the item it shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardViewModel {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_line: String,
    pub link: String,
    pub link_label: String,
    #[serde(skip)]
    pub item: Item,
}

/// Full content of the card container
///
/// Every render replaces the previous value wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardGridViewModel {
    /// Placeholder cards painted while the catalog loads
    Skeleton { count: usize },
    /// Search matched nothing
    Empty { message: String },
    /// Catalog could not be loaded
    Error { message: String },
    Cards { cards: Vec<CardViewModel> },
}

impl CardGridViewModel {
    pub fn cards(&self) -> &[CardViewModel] {
        match self {
            CardGridViewModel::Cards { cards } => cards,
            _ => &[],
        }
    }

    /// Number of tiles the grid lays out (skeletons included)
    pub fn tile_count(&self) -> usize {
        match self {
            CardGridViewModel::Skeleton { count } => *count,
            CardGridViewModel::Cards { cards } => cards.len(),
            CardGridViewModel::Empty { .. } | CardGridViewModel::Error { .. } => 0,
        }
    }
}
