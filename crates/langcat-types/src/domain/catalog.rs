use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::item::Item;
use crate::Result;

/// Ordered, immutable collection of catalog items
///
/// Items keep the order in which they appear in the source document.
/// There is no way to add, remove or mutate an item after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a JSON array of items
    ///
    /// Only invalid JSON or a non-array document is an error. An element
    /// that is not an object becomes an empty item.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::from_values(values))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_values(values))
    }

    fn from_values(values: Vec<Value>) -> Self {
        let items = values
            .into_iter()
            .map(|value| Item::deserialize(value).unwrap_or_default())
            .collect();
        Self { items }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive exact name lookup; first match wins
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let needle = name.to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.to_lowercase() == needle)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
