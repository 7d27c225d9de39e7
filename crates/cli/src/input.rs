//! Stock list input: JSON stock files and inline item specs.

use std::fs;
use std::path::Path;

use anyhow::Context;

use stockroom_core::DomainResult;
use stockroom_inventory::StockItem;

/// Load a stock list from a JSON array of `{name, sell_in, quality}`
/// records. Categories are resolved from the names on deserialization.
pub fn load_stock_file(path: &Path) -> anyhow::Result<Vec<StockItem>> {
    let bytes =
        fs::read(path).with_context(|| format!("reading stock file {}", path.display()))?;
    let stock: Vec<StockItem> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing stock file {}", path.display()))?;
    Ok(stock)
}

/// Parse repeated `--item "name, sell_in, quality"` specs.
///
/// Fails on the first malformed spec so the user sees which one was wrong
/// before any update runs.
pub fn parse_item_specs(specs: &[String]) -> DomainResult<Vec<StockItem>> {
    specs.iter().map(|spec| spec.parse()).collect()
}
