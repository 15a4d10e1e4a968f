//! Case-insensitive substring search over item name and description.

use langcat_types::Item;

/// Check whether an item matches an already-lowercased query
pub fn matches_query(item: &Item, lowered_query: &str) -> bool {
    item.name.to_lowercase().contains(lowered_query)
        || item.description.to_lowercase().contains(lowered_query)
}

/// Return the items whose name or description contains `query`
///
/// Matching lowercases both sides. The result keeps the input order and
/// an empty query returns every item.
pub fn filter_items(query: &str, items: &[Item]) -> Vec<Item> {
    let lowered = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &lowered))
        .cloned()
        .collect()
}
