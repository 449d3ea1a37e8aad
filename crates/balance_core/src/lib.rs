//! # balance_core - Minigame Variant Economy Model
//!
//! Pure cost/power formulas and the validated data model for the three
//! minigame variant families (Dodge, Snake, Memory Match). No file IO
//! lives here; the `balance_report` crate layers loading and table
//! reporting on top.

pub mod config;
pub mod cost;
pub mod power;
pub mod variant;

pub use config::{EconomyConfig, GameFamily};
pub use cost::clone_cost;
pub use power::clone_multiplier;
pub use variant::{Variant, VariantError};
