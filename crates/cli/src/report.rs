//! Day-by-day reporting over the stock.

use core::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use stockroom_inventory::{ItemCategory, StockItem};

/// State of one item as observed in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockSnapshot {
    pub name: String,
    pub category: ItemCategory,
    pub sell_in: i32,
    pub quality: i32,
}

impl From<&StockItem> for StockSnapshot {
    fn from(item: &StockItem) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category(),
            sell_in: item.sell_in(),
            quality: item.quality(),
        }
    }
}

/// The whole stock as observed after one night (or at day 0, before any
/// update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NightReport {
    pub night: u32,
    pub date: NaiveDate,
    pub stock: Vec<StockSnapshot>,
}

impl NightReport {
    pub fn snapshot(night: u32, date: NaiveDate, stock: &[StockItem]) -> Self {
        Self {
            night,
            date,
            stock: stock.iter().map(StockSnapshot::from).collect(),
        }
    }
}

impl fmt::Display for NightReport {
    /// The original console program's day-by-day format, with the simulated
    /// calendar date added to the header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------- day {} ({}) --------", self.night, self.date)?;
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.stock {
            writeln!(f, "{}, {}, {}", item.name, item.sell_in, item.quality)?;
        }
        Ok(())
    }
}
