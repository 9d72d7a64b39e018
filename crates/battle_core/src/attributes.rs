//! Level-scaled unit attribute resolution.
//!
//! Resolves a unit kind + level into concrete property values by applying
//! the linear scaling formula to the stats table:
//!
//! ```text
//! value = round(base + max(0, level - 1) * increase)
//! ```
//!
//! Level 1 yields exactly the base value. Rounding is fixed-point
//! round-to-nearest with ties away from zero, applied consistently to every
//! property.

use serde::{Deserialize, Serialize};

use crate::error::{BattleError, Result};
use crate::math::Fixed;
use crate::stats::{PropertyScaling, StatsTable};
use crate::units::{UnitProperty, UnitType};

/// Resolved property values for one unit at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyValues {
    /// Movement speed.
    pub speed: u32,
    /// Carry capacity.
    pub carry: u32,
    /// Offensive strength.
    pub attack: u32,
    /// Defensive strength.
    pub defense: u32,
    /// Hit points.
    pub health: u32,
}

impl PropertyValues {
    /// Value of the given property.
    #[must_use]
    pub const fn get(&self, property: UnitProperty) -> u32 {
        match property {
            UnitProperty::Speed => self.speed,
            UnitProperty::Carry => self.carry,
            UnitProperty::Attack => self.attack,
            UnitProperty::Defense => self.defense,
            UnitProperty::Health => self.health,
        }
    }
}

/// Apply the scaling formula for one property.
///
/// Levels below 1 behave as level 1 (the increase multiplier never goes
/// negative). Scaled values are clamped at zero before conversion; stats
/// data is non-negative in practice, but a negative `increase` must not
/// wrap.
fn scale_property(scaling: PropertyScaling, level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    let value = scaling.base + Fixed::from_num(steps) * scaling.increase;
    let rounded: i64 = value.round().to_num();
    u32::try_from(rounded.max(0)).unwrap_or(u32::MAX)
}

/// Resolve all properties for a unit kind at a level.
///
/// # Errors
///
/// Fails fast on configuration gaps: an unknown unit kind, or a level above
/// the table's `max_level` for that kind. A resolution that would read
/// outside the configured data never returns partial values.
pub fn resolve_properties(
    unit: UnitType,
    level: u32,
    table: &StatsTable,
) -> Result<PropertyValues> {
    let stats = table.get(unit)?;
    let level = level.max(1);
    if level > stats.max_level {
        return Err(BattleError::LevelOutOfRange {
            unit,
            level,
            max_level: stats.max_level,
        });
    }

    Ok(PropertyValues {
        speed: scale_property(stats.speed, level),
        carry: scale_property(stats.carry, level),
        attack: scale_property(stats.attack, level),
        defense: scale_property(stats.defense, level),
        health: scale_property(stats.health, level),
    })
}
