// Per-family economy configuration

/// Cost-curve constants for one variant family.
///
/// Costs grow super-linearly in the clone index (exponent 1.2-1.5) while
/// power for index >= 2 grows only linearly, so the power/cost ratio is
/// expected to fall as a family is cloned out. The reporter exists to
/// verify that empirically per data file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomyConfig {
    /// Cost of the baseline variant (clone index 0)
    pub base_cost: u32,
    /// Exponent applied to the clone index for clones
    pub cost_exponent: f64,
}

/// The three minigame variant families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameFamily {
    Dodge,
    Snake,
    MemoryMatch,
}

impl GameFamily {
    /// Reporting order: Dodge, Snake, Memory Match.
    pub const ALL: [GameFamily; 3] = [
        GameFamily::Dodge,
        GameFamily::Snake,
        GameFamily::MemoryMatch,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GameFamily::Dodge => "Dodge",
            GameFamily::Snake => "Snake",
            GameFamily::MemoryMatch => "Memory Match",
        }
    }

    /// Cost-curve constants for this family
    pub fn economy(&self) -> EconomyConfig {
        match self {
            GameFamily::Dodge => EconomyConfig {
                base_cost: 175,
                cost_exponent: 1.5,
            },
            GameFamily::Snake => EconomyConfig {
                base_cost: 150,
                cost_exponent: 1.5,
            },
            GameFamily::MemoryMatch => EconomyConfig {
                base_cost: 200,
                cost_exponent: 1.2,
            },
        }
    }

    /// Default win parameter when a record omits it (victory limit for
    /// Dodge/Snake, card count for Memory Match).
    pub fn default_win_value(&self) -> u32 {
        match self {
            GameFamily::Dodge => 30,
            GameFamily::Snake => 20,
            GameFamily::MemoryMatch => 12,
        }
    }

    /// Conventional file name under the variants data directory
    pub fn data_file(&self) -> &'static str {
        match self {
            GameFamily::Dodge => "dodge_variants.json",
            GameFamily::Snake => "snake_variants.json",
            GameFamily::MemoryMatch => "memory_match_variants.json",
        }
    }
}
