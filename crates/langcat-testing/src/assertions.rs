//! Assertions over `--format json` output.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Names of the items in a JSON array, in output order
pub fn item_names(json: &Value) -> Result<Vec<String>> {
    let items = json.as_array().context("Expected a JSON array of items")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["name"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Item {} missing name", i))
        })
        .collect()
}

pub fn assert_item_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names = item_names(json)?;
    if names != expected {
        bail!("Expected items {:?}, got {:?}", expected, names);
    }
    Ok(())
}

/// Chart bar values must never increase from one bar to the next
pub fn assert_bars_descending(json: &Value) -> Result<()> {
    let bars = json["bars"]
        .as_array()
        .context("Expected 'bars' array in chart JSON")?;

    let values = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            bar["value"]
                .as_f64()
                .with_context(|| format!("Bar {} missing value", i))
        })
        .collect::<Result<Vec<f64>>>()?;

    if let Some(pair) = values.windows(2).find(|pair| pair[0] < pair[1]) {
        bail!("Chart bars out of order: {} before {}", pair[0], pair[1]);
    }
    Ok(())
}
