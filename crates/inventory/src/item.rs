use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;

/// Upper bound for quality on ordinary categories.
///
/// Legendary items sit outside this bound (80 by convention) and are never
/// checked against it.
pub const MAX_QUALITY: i32 = 50;

/// Reserved name: the ripening cheese.
pub const AGED_BRIE: &str = "Aged Brie";

/// Reserved name: the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Reserved name: the event pass.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Update-rule category of a stock item.
///
/// Resolved once from the item name at construction; the nightly update
/// dispatches on this tag and never re-inspects the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Degrades by 1 per night, twice as fast once expired.
    Normal,
    /// Increases in quality as it ages.
    Ripening,
    /// Exempt from all updates.
    Legendary,
    /// Accelerating increase, worthless once the event has passed.
    EventPass,
}

impl ItemCategory {
    /// Resolve the category for an item name (exact, case-sensitive match).
    ///
    /// Unmatched names fall through to [`ItemCategory::Normal`].
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::Ripening,
            SULFURAS => Self::Legendary,
            BACKSTAGE_PASSES => Self::EventPass,
            _ => Self::Normal,
        }
    }
}

/// A single stock record.
///
/// Items are constructed by the caller; the engine only mutates `sell_in`
/// and `quality` in place, once per night, and never creates or destroys a
/// record. Incoming values are not range-checked: out-of-range quality
/// produces whatever the update arithmetic produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStockItem", into = "RawStockItem")]
pub struct StockItem {
    name: String,
    category: ItemCategory,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl StockItem {
    /// Construct a stock record. The category is resolved from `name` here
    /// and stays fixed for the lifetime of the item.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Days remaining before the item expires; negative once expired.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    /// Desirability score, held in [0, 50] for non-legendary categories.
    pub fn quality(&self) -> i32 {
        self.quality
    }
}

impl fmt::Display for StockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl FromStr for StockItem {
    type Err = DomainError;

    /// Parse the textual form `name, sell_in, quality`.
    ///
    /// The name itself may contain commas (`"Sulfuras, Hand of Ragnaros"`),
    /// so the two integers are taken from the right.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::invalid_record(format!(
                "expected `name, sell_in, quality`, got `{s}`"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }

        let sell_in: i32 = sell_in
            .trim()
            .parse()
            .map_err(|e| DomainError::invalid_record(format!("sell_in: {e}")))?;
        let quality: i32 = quality
            .trim()
            .parse()
            .map_err(|e| DomainError::invalid_record(format!("quality: {e}")))?;

        Ok(Self::new(name, sell_in, quality))
    }
}

/// Wire/file form of a stock record.
///
/// The category is recomputed from the name on the way in, so a stored
/// record cannot desynchronize the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStockItem {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<RawStockItem> for StockItem {
    fn from(raw: RawStockItem) -> Self {
        Self::new(raw.name, raw.sell_in, raw.quality)
    }
}

impl From<StockItem> for RawStockItem {
    fn from(item: StockItem) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
