//! Console harness around the nightly update engine.
//!
//! The engine itself lives in `stockroom-inventory`; this crate wires it to
//! a day-by-day console driver: build or load a stock list, run one update
//! per simulated night, and render the classic day-by-day report.

use chrono::NaiveDate;

use stockroom_inventory::{StockItem, update_quality};

pub mod input;
pub mod report;

pub use input::{load_stock_file, parse_item_specs};
pub use report::{NightReport, StockSnapshot};

/// The six records the original console program shipped with.
pub fn sample_stock() -> Vec<StockItem> {
    vec![
        StockItem::new("+5 Dexterity Vest", 10, 20),
        StockItem::new("Aged Brie", 2, 0),
        StockItem::new("Elixir of the Mongoose", 5, 7),
        StockItem::new("Sulfuras, Hand of Ragnaros", 0, 80),
        StockItem::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        StockItem::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Run `nights` nightly updates over `stock`, in place.
///
/// Returns one report per state observed: the initial state (day 0, before
/// any update) followed by the state after each night. The calendar advances
/// one day per night from `start_date`.
pub fn run_nights(stock: &mut [StockItem], nights: u32, start_date: NaiveDate) -> Vec<NightReport> {
    let mut reports = Vec::with_capacity(nights as usize + 1);
    reports.push(NightReport::snapshot(0, start_date, stock));

    for night in 1..=nights {
        update_quality(stock);
        let date = start_date + chrono::Duration::days(i64::from(night));
        tracing::debug!(night, %date, items = stock.len(), "nightly update applied");
        reports.push(NightReport::snapshot(night, date, stock));
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_zero() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn sample_stock_matches_the_original_console_program() {
        let stock = sample_stock();
        let observed: Vec<(&str, i32, i32)> = stock
            .iter()
            .map(|item| (item.name(), item.sell_in(), item.quality()))
            .collect();

        assert_eq!(
            observed,
            vec![
                ("+5 Dexterity Vest", 10, 20),
                ("Aged Brie", 2, 0),
                ("Elixir of the Mongoose", 5, 7),
                ("Sulfuras, Hand of Ragnaros", 0, 80),
                ("Backstage passes to a TAFKAL80ETC concert", 15, 20),
                ("Conjured Mana Cake", 3, 6),
            ]
        );
    }

    #[test]
    fn one_night_over_the_sample_stock() {
        let mut stock = sample_stock();
        let reports = run_nights(&mut stock, 1, day_zero());

        assert_eq!(reports.len(), 2);
        let observed: Vec<(i32, i32)> = reports[1]
            .stock
            .iter()
            .map(|s| (s.sell_in, s.quality))
            .collect();
        assert_eq!(
            observed,
            vec![(9, 19), (1, 1), (4, 6), (0, 80), (14, 21), (2, 5)]
        );
    }

    #[test]
    fn day_zero_report_shows_the_untouched_stock() {
        let mut stock = sample_stock();
        let reports = run_nights(&mut stock, 3, day_zero());

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].night, 0);
        assert_eq!(reports[0].date, day_zero());
        assert_eq!(reports[0].stock[0].sell_in, 10);
        assert_eq!(reports[0].stock[0].quality, 20);
    }

    #[test]
    fn calendar_advances_one_day_per_night() {
        let mut stock = sample_stock();
        let reports = run_nights(&mut stock, 2, day_zero());

        let dates: Vec<NaiveDate> = reports.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn zero_nights_reports_only_day_zero() {
        let mut stock = sample_stock();
        let reports = run_nights(&mut stock, 0, day_zero());

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].night, 0);
    }
}
