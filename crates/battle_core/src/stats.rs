//! Unit-stats configuration table.
//!
//! The table is the resolver's only external collaborator: per unit kind it
//! holds the resource cost of each level and the base/per-level-increase
//! pair for each scalable property. It is loaded once from a RON file (or
//! built programmatically in tests) and treated as an immutable snapshot for
//! the duration of a resolution call.
//!
//! **Note:** Missing entries are configuration errors. Lookups fail fast
//! rather than defaulting, since combat totals would otherwise be silently
//! wrong.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BattleError, Result};
use crate::math::{fixed_serde, Fixed};
use crate::units::{UnitProperty, UnitType};

/// Base value and per-level increase for one property.
///
/// A unit at level `n` has `round(base + (n - 1) * increase)` for the
/// property. Values are fixed-point so data files can express fractional
/// growth (e.g. +1.5 attack per level).
///
/// # Example RON
///
/// ```ron
/// PropertyScaling(
///     base: 42949672960,      // Fixed-point for 10.0
///     increase: 6442450944,   // Fixed-point for 1.5
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyScaling {
    /// Value at level 1.
    #[serde(with = "fixed_serde")]
    pub base: Fixed,
    /// Added per level above 1.
    #[serde(with = "fixed_serde")]
    pub increase: Fixed,
}

impl PropertyScaling {
    /// Create a scaling pair from integer base and increase.
    #[must_use]
    pub fn new(base: i32, increase: i32) -> Self {
        Self {
            base: Fixed::from_num(base),
            increase: Fixed::from_num(increase),
        }
    }
}

/// A 4-component resource cost vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceCost {
    /// Food component.
    pub food: u32,
    /// Wood component.
    pub wood: u32,
    /// Ore component.
    pub ore: u32,
    /// Stone component.
    pub stone: u32,
}

impl ResourceCost {
    /// Zero cost.
    pub const ZERO: Self = Self {
        food: 0,
        wood: 0,
        ore: 0,
        stone: 0,
    };

    /// Create a cost vector.
    #[must_use]
    pub const fn new(food: u32, wood: u32, ore: u32, stone: u32) -> Self {
        Self {
            food,
            wood,
            ore,
            stone,
        }
    }
}

// Loss bills for very large rosters can exceed u32; accumulation
// saturates rather than wrapping.
impl std::ops::Add for ResourceCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            food: self.food.saturating_add(rhs.food),
            wood: self.wood.saturating_add(rhs.wood),
            ore: self.ore.saturating_add(rhs.ore),
            stone: self.stone.saturating_add(rhs.stone),
        }
    }
}

impl std::ops::AddAssign for ResourceCost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Mul<u32> for ResourceCost {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            food: self.food.saturating_mul(rhs),
            wood: self.wood.saturating_mul(rhs),
            ore: self.ore.saturating_mul(rhs),
            stone: self.stone.saturating_mul(rhs),
        }
    }
}

impl std::iter::Sum for ResourceCost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

/// Stats definition for one unit kind.
///
/// # Example RON
///
/// ```ron
/// UnitStats(
///     max_level: 10,
///     costs: [
///         ResourceCost(food: 50, wood: 30, ore: 10, stone: 0),
///         // ... one entry per level up to max_level
///     ],
///     speed: PropertyScaling(base: 42949672960, increase: 2147483648),
///     carry: PropertyScaling(base: 85899345920, increase: 4294967296),
///     attack: PropertyScaling(base: 42949672960, increase: 6442450944),
///     defense: PropertyScaling(base: 60129542144, increase: 8589934592),
///     health: PropertyScaling(base: 214748364800, increase: 21474836480),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    /// Highest level this kind can be upgraded to.
    pub max_level: u32,

    /// Resource cost per level, indexed by `level - 1`.
    ///
    /// Must contain exactly `max_level` entries.
    pub costs: Vec<ResourceCost>,

    /// Movement speed scaling.
    pub speed: PropertyScaling,
    /// Carry capacity scaling.
    pub carry: PropertyScaling,
    /// Attack scaling.
    pub attack: PropertyScaling,
    /// Defense scaling.
    pub defense: PropertyScaling,
    /// Health scaling.
    pub health: PropertyScaling,
}

impl UnitStats {
    /// Scaling pair for the given property.
    #[must_use]
    pub const fn scaling(&self, property: UnitProperty) -> PropertyScaling {
        match property {
            UnitProperty::Speed => self.speed,
            UnitProperty::Carry => self.carry,
            UnitProperty::Attack => self.attack,
            UnitProperty::Defense => self.defense,
            UnitProperty::Health => self.health,
        }
    }
}

/// The complete unit-stats table.
///
/// Loaded from a RON file at startup. Callers pass a reference into every
/// resolution call; a config editor producing a new table does not affect
/// calls already holding the old snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsTable {
    /// Stats per unit kind.
    pub units: HashMap<UnitType, UnitStats>,
}

impl StatsTable {
    /// Create an empty table (populate via [`StatsTable::insert`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the stats entry for a unit kind.
    pub fn insert(&mut self, unit: UnitType, stats: UnitStats) {
        self.units.insert(unit, stats);
    }

    /// Look up the stats entry for a unit kind.
    pub fn get(&self, unit: UnitType) -> Result<&UnitStats> {
        self.units
            .get(&unit)
            .ok_or(BattleError::MissingUnitStats { unit })
    }

    /// Resource cost for one unit of the given kind at the given level.
    ///
    /// Levels below 1 behave as level 1, matching property scaling.
    pub fn cost(&self, unit: UnitType, level: u32) -> Result<ResourceCost> {
        let stats = self.get(unit)?;
        let level = level.max(1);
        let index = (level - 1) as usize;
        stats
            .costs
            .get(index)
            .copied()
            .ok_or(BattleError::LevelOutOfRange {
                unit,
                level,
                max_level: stats.max_level,
            })
    }

    /// Load a stats table from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| BattleError::DataReadError {
                path: path.display().to_string(),
                source,
            })?;
        let table: Self = ron::from_str(&contents).map_err(|e| BattleError::DataParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            units = table.units.len(),
            "loaded stats table"
        );
        Ok(table)
    }

    /// Load from a RON string (useful for embedded tables and tests).
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| BattleError::DataParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spearmen_stats() -> UnitStats {
        UnitStats {
            max_level: 2,
            costs: vec![ResourceCost::new(50, 30, 10, 0), ResourceCost::new(75, 45, 15, 0)],
            speed: PropertyScaling::new(10, 0),
            carry: PropertyScaling::new(20, 1),
            attack: PropertyScaling::new(10, 1),
            defense: PropertyScaling::new(14, 2),
            health: PropertyScaling::new(50, 5),
        }
    }

    #[test]
    fn test_missing_unit_is_an_error() {
        let table = StatsTable::new();
        let err = table.get(UnitType::Catapult).unwrap_err();
        assert!(matches!(
            err,
            BattleError::MissingUnitStats {
                unit: UnitType::Catapult
            }
        ));
    }

    #[test]
    fn test_cost_lookup() {
        let mut table = StatsTable::new();
        table.insert(UnitType::NileSpearmen, spearmen_stats());

        let lvl1 = table.cost(UnitType::NileSpearmen, 1).unwrap();
        assert_eq!(lvl1, ResourceCost::new(50, 30, 10, 0));

        // Level 0 behaves as level 1.
        let lvl0 = table.cost(UnitType::NileSpearmen, 0).unwrap();
        assert_eq!(lvl0, lvl1);

        let err = table.cost(UnitType::NileSpearmen, 3).unwrap_err();
        assert!(matches!(err, BattleError::LevelOutOfRange { level: 3, .. }));
    }

    #[test]
    fn test_cost_error_reports_configured_max_level() {
        // A truncated cost list must not shrink the reported maximum; the
        // error cites the table's declared max_level and leaves the
        // list/level inconsistency to the validator.
        let mut stats = spearmen_stats();
        stats.max_level = 5;
        let mut table = StatsTable::new();
        table.insert(UnitType::NileSpearmen, stats);

        let err = table.cost(UnitType::NileSpearmen, 4).unwrap_err();
        assert!(matches!(
            err,
            BattleError::LevelOutOfRange {
                level: 4,
                max_level: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_resource_cost_arithmetic() {
        let a = ResourceCost::new(1, 2, 3, 4);
        let b = ResourceCost::new(10, 20, 30, 40);
        assert_eq!(a + b, ResourceCost::new(11, 22, 33, 44));
        assert_eq!(a * 3, ResourceCost::new(3, 6, 9, 12));
        let total: ResourceCost = [a, b, a].into_iter().sum();
        assert_eq!(total, ResourceCost::new(12, 24, 36, 48));

        // Bills past the u32 range saturate instead of wrapping.
        let huge = ResourceCost::new(50, 0, 0, 0) * 100_000_000;
        assert_eq!(huge.food, u32::MAX);
        assert_eq!((huge + huge).food, u32::MAX);
    }

    #[test]
    fn test_ron_round_trip_preserves_bits() {
        let mut table = StatsTable::new();
        table.insert(UnitType::NileSpearmen, spearmen_stats());

        let text = ron::to_string(&table).unwrap();
        let back = StatsTable::from_ron_str(&text).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_parse_error_is_descriptive() {
        let err = StatsTable::from_ron_str("not ron at all (").unwrap_err();
        assert!(matches!(err, BattleError::DataParseError { .. }));
    }
}
