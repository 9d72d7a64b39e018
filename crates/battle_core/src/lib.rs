//! # Battle Core
//!
//! Deterministic battle resolution core for the strategy game.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO beyond loading the stats table from RON
//! - No system randomness
//! - No floating-point math (uses fixed-point)
//!
//! A battle is resolved in a single closed-form pass: two rosters of unit
//! stacks plus a wall defense bonus go in, a [`battle::BattleSummary`] with
//! per-category totals and per-stack survivor counts comes out. The unit
//! stats table is an explicit parameter on every call, so concurrent callers
//! can each hold their own immutable snapshot while a config editor produces
//! new ones.
//!
//! ## Crate Structure
//!
//! - [`units`] - Unit identity: kinds, attack categories, properties
//! - [`stats`] - The unit-stats configuration table (external data)
//! - [`attributes`] - Level-scaled property resolution
//! - [`battle`] - The battle resolver (variants V1 and V2)
//! - [`losses`] - Resource-loss derivation from survivor counts
//! - [`math`] - Fixed-point math utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod attributes;
pub mod battle;
pub mod error;
pub mod losses;
pub mod math;
pub mod stats;
pub mod units;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::attributes::{resolve_properties, PropertyValues};
    pub use crate::battle::{
        resolve, resolve_v1, resolve_v2, BattleSummary, BattleUnit, BattleUnitReport,
        BattleVariant, CategoryTotals, SideTotals,
    };
    pub use crate::error::{BattleError, Result};
    pub use crate::losses::{roster_losses, stack_losses};
    pub use crate::math::Fixed;
    pub use crate::stats::{PropertyScaling, ResourceCost, StatsTable, UnitStats};
    pub use crate::units::{AttackCategory, UnitProperty, UnitType};
}
