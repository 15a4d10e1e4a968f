// Engine module - pure catalog logic (search, chart series, debounce, modal state)
// This layer sits between the catalog types and CLI presentation.
// Nothing here touches the terminal or the filesystem.

pub mod chart;
pub mod debounce;
pub mod modal;
pub mod search;

pub use chart::{ChartConfig, ChartKind, ChartSeries, Orientation};
pub use debounce::Debouncer;
pub use modal::{ModalController, ModalInput, ModalState};
pub use search::{filter_items, matches_query};

use langcat_types::{Catalog, Item};

// Façade API - Stable public interface for CLI layer

/// Filter the full catalog by a free-text query
pub fn search_catalog(query: &str, catalog: &Catalog) -> Vec<Item> {
    filter_items(query, catalog.items())
}

/// Build the popularity chart series from the full catalog
pub fn popularity_chart(catalog: &Catalog) -> ChartSeries {
    chart::build_popularity_chart(catalog.items())
}
