//! Inventory domain: the nightly stock update engine.
//!
//! This crate contains the business rules for the nightly stock update,
//! implemented purely as deterministic domain logic (no IO, no logging,
//! no storage).

pub mod end_of_day;
pub mod item;

pub use end_of_day::update_quality;
pub use item::{ItemCategory, MAX_QUALITY, StockItem};
