//! The nightly update: one pass over the stock, three ordered phases per
//! item.

use crate::item::{ItemCategory, MAX_QUALITY, StockItem};

/// Apply one night's update to every item in `stock`, in place.
///
/// Total over any input: no error conditions, no reordering, no items
/// created or removed. Each item's update is independent of every other
/// item's; the exclusive borrow gives the engine the unshared access it
/// needs for the duration of the call.
pub fn update_quality(stock: &mut [StockItem]) {
    for item in stock.iter_mut() {
        item.quality = pre_adjust(item.category(), item.sell_in, item.quality);
        item.sell_in = tick_sell_in(item.category(), item.sell_in);
        item.quality = post_adjust(item.category(), item.sell_in, item.quality);
    }
}

/// Phase 1: quality adjustment seen before the sell-in decrement.
///
/// Appreciating categories step up, with the event pass's tiered bonuses
/// each clamped to the cap on their own. Normal stock steps down, guarded
/// at zero. Legendary stock is untouched.
fn pre_adjust(category: ItemCategory, sell_in: i32, quality: i32) -> i32 {
    match category {
        ItemCategory::Ripening | ItemCategory::EventPass => {
            if quality >= MAX_QUALITY {
                return quality;
            }
            let mut quality = quality + 1;
            if category == ItemCategory::EventPass {
                if sell_in < 11 {
                    quality = (quality + 1).min(MAX_QUALITY);
                }
                if sell_in < 6 {
                    quality = (quality + 1).min(MAX_QUALITY);
                }
            }
            quality
        }
        ItemCategory::Legendary => quality,
        ItemCategory::Normal => {
            if quality > 0 {
                quality - 1
            } else {
                quality
            }
        }
    }
}

/// Phase 2: the night passes. Legendary stock never ages.
fn tick_sell_in(category: ItemCategory, sell_in: i32) -> i32 {
    if category == ItemCategory::Legendary {
        sell_in
    } else {
        sell_in - 1
    }
}

/// Phase 3: expiry adjustment, seen after the sell-in decrement. Applies
/// only once `sell_in` has gone negative.
fn post_adjust(category: ItemCategory, sell_in: i32, quality: i32) -> i32 {
    if sell_in >= 0 {
        return quality;
    }
    match category {
        ItemCategory::Legendary => quality,
        ItemCategory::Ripening => {
            if quality < MAX_QUALITY {
                quality + 1
            } else {
                quality
            }
        }
        ItemCategory::EventPass => 0,
        // The second unit decrement is floored independently of phase 1's
        // zero guard: stock entering the night at quality 1 ends at 0.
        ItemCategory::Normal => (quality - 1).max(0),
    }
}
