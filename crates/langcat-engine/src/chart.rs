//! Popularity chart series.
//!
//! Turns catalog items into parallel label/value sequences ordered by
//! descending popularity, together with the display options the chart
//! widget should honor.

use std::cmp::Ordering;

use langcat_types::Item;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Display options handed to the chart widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub orientation: Orientation,
    pub dataset_label: String,
    pub show_legend: bool,
    pub begin_at_zero: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Bar,
            orientation: Orientation::Horizontal,
            dataset_label: "Popularity (%)".to_string(),
            show_legend: false,
            begin_at_zero: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub config: ChartConfig,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label/value pairs in chart order
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Upper bound of the value axis
    ///
    /// With `begin_at_zero` the axis never drops below zero, so an all-negative
    /// or empty series still yields `0.0`.
    pub fn axis_max(&self) -> f64 {
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if self.config.begin_at_zero {
            max.max(0.0)
        } else if max.is_finite() {
            max
        } else {
            0.0
        }
    }
}

/// Sort a copy of `items` by descending popularity and split it into series
///
/// The sort is stable: items with equal popularity keep their catalog order.
/// The input slice is never reordered.
pub fn build_popularity_chart(items: &[Item]) -> ChartSeries {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });

    ChartSeries {
        labels: sorted.iter().map(|item| item.name.clone()).collect(),
        values: sorted.iter().map(|item| item.popularity).collect(),
        config: ChartConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending() {
        let items = vec![
            Item::new("Go", "systems", 10.0),
            Item::new("Rust", "safe systems", 20.0),
            Item::new("C", "portable assembly", 15.0),
        ];

        let series = build_popularity_chart(&items);
        assert_eq!(series.labels, vec!["Rust", "C", "Go"]);
        assert_eq!(series.values, vec![20.0, 15.0, 10.0]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let items = vec![
            Item::new("B", "", 5.0),
            Item::new("A", "", 7.0),
            Item::new("C", "", 5.0),
            Item::new("D", "", 5.0),
        ];

        let series = build_popularity_chart(&items);
        assert_eq!(series.labels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_signed_zero_is_a_tie() {
        let items = vec![
            Item::new("A", "", -0.0),
            Item::new("B", "", 0.0),
            Item::new("C", "", -0.0),
        ];

        let series = build_popularity_chart(&items);
        assert_eq!(series.labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_input_order_untouched() {
        let items = vec![Item::new("Low", "", 1.0), Item::new("High", "", 2.0)];
        let _ = build_popularity_chart(&items);
        assert_eq!(items[0].name, "Low");
    }

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert!(!config.show_legend);
        assert!(config.begin_at_zero);
    }

    #[test]
    fn test_axis_max_starts_at_zero() {
        let empty = build_popularity_chart(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.axis_max(), 0.0);

        let series = build_popularity_chart(&[Item::new("X", "", 42.5)]);
        assert_eq!(series.axis_max(), 42.5);
    }
}
