// Variant record and structural validation

use serde::Deserialize;
use thiserror::Error;

use crate::config::GameFamily;

/// A single minigame variant record, as stored in the per-family JSON
/// arrays.
///
/// Collections are order-significant: index 0 is the unmodified baseline
/// and higher clone indexes are progressively more expensive copies.
/// Records are loaded once and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    /// Display name
    pub name: String,
    /// Ordinal position in the cost-scaling progression (0 = original)
    pub clone_index: u32,
    /// Win threshold for Dodge/Snake variants
    #[serde(default)]
    pub victory_limit: Option<u32>,
    /// Total cards for Memory Match variants
    #[serde(default)]
    pub card_count: Option<u32>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("record {index}: name is empty")]
    EmptyName { index: usize },

    #[error("record {index} ({name}): {family} variants take victory_limit, found card_count")]
    UnexpectedCardCount {
        index: usize,
        name: String,
        family: &'static str,
    },

    #[error("record {index} ({name}): {family} variants take card_count, found victory_limit")]
    UnexpectedVictoryLimit {
        index: usize,
        name: String,
        family: &'static str,
    },
}

impl Variant {
    /// Structural validation beyond what serde enforces.
    ///
    /// A missing win field is allowed (the family default applies); a win
    /// field belonging to another family marks a mixed-up data file.
    pub fn validate(&self, family: GameFamily, index: usize) -> Result<(), VariantError> {
        if self.name.trim().is_empty() {
            return Err(VariantError::EmptyName { index });
        }
        match family {
            GameFamily::Dodge | GameFamily::Snake => {
                if self.card_count.is_some() {
                    return Err(VariantError::UnexpectedCardCount {
                        index,
                        name: self.name.clone(),
                        family: family.label(),
                    });
                }
            }
            GameFamily::MemoryMatch => {
                if self.victory_limit.is_some() {
                    return Err(VariantError::UnexpectedVictoryLimit {
                        index,
                        name: self.name.clone(),
                        family: family.label(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Whichever win parameter the record carries, for display.
    pub fn win_value(&self) -> Option<u32> {
        self.victory_limit.or(self.card_count)
    }
}
