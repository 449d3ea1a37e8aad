// Power formulas per variant family
//
// Dodge:  (dodges^2 / (collisions + 1)) * multiplier, with 0 collisions
// Snake:  ((length^3 * 5) / time) * multiplier, time = length * 2
// Memory: ((pairs^2 * (pairs + 1) * 50) / time) * multiplier, time = pairs * 2.5

use crate::config::GameFamily;
use crate::variant::Variant;

/// Clone multiplier shared by all three formulas: the baseline and the
/// first clone score unscaled, later clones scale linearly by their own
/// index.
pub fn clone_multiplier(clone_index: u32) -> u32 {
    if clone_index <= 1 {
        1
    } else {
        clone_index
    }
}

impl GameFamily {
    /// Synthetic power score for one variant of this family.
    ///
    /// Missing win parameters fall back to the family default.
    pub fn power(&self, variant: &Variant) -> u64 {
        let multiplier = f64::from(clone_multiplier(variant.clone_index));
        let base = match self {
            GameFamily::Dodge => {
                let limit = f64::from(
                    variant.victory_limit.unwrap_or_else(|| self.default_win_value()),
                );
                limit * limit
            }
            GameFamily::Snake => {
                let limit = f64::from(
                    variant.victory_limit.unwrap_or_else(|| self.default_win_value()),
                );
                let time = limit * 2.0; // 2 seconds per food
                limit.powi(3) * 5.0 / time
            }
            GameFamily::MemoryMatch => {
                let cards = f64::from(
                    variant.card_count.unwrap_or_else(|| self.default_win_value()),
                );
                let pairs = cards / 2.0;
                let time = pairs * 2.5; // 2.5 seconds per pair
                pairs * pairs * (pairs + 1.0) * 50.0 / time
            }
        };
        // NaN from a zero win value saturates to 0 here
        (base * multiplier).floor() as u64
    }
}
