//! Test fixtures and helpers.
//!
//! A complete sample stats table and roster builders for consistent
//! testing across crates.

use battle_core::battle::BattleUnit;
use battle_core::stats::{PropertyScaling, ResourceCost, StatsTable, UnitStats};
use battle_core::units::UnitType;
use fixed::types::I32F32;

/// Levels covered by the sample table.
pub const SAMPLE_MAX_LEVEL: u32 = 10;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a fixed-point number from a float (for tests only).
///
/// Note: In real resolution code, never use floats.
/// This is only for convenient test setup.
#[must_use]
pub fn fixed_f(n: f64) -> I32F32 {
    I32F32::from_num(n)
}

/// Build a battle stack.
#[must_use]
pub const fn stack(unit: UnitType, amount: u32, level: u32) -> BattleUnit {
    BattleUnit::new(unit, amount, level)
}

/// Build a stats entry with linearly growing per-level costs.
fn entry(
    cost: ResourceCost,
    cost_step: ResourceCost,
    speed: (f64, f64),
    carry: (f64, f64),
    attack: (f64, f64),
    defense: (f64, f64),
    health: (f64, f64),
) -> UnitStats {
    let scaling = |(base, increase): (f64, f64)| PropertyScaling {
        base: fixed_f(base),
        increase: fixed_f(increase),
    };
    let costs = (0..SAMPLE_MAX_LEVEL)
        .map(|step| cost + cost_step * step)
        .collect();
    UnitStats {
        max_level: SAMPLE_MAX_LEVEL,
        costs,
        speed: scaling(speed),
        carry: scaling(carry),
        attack: scaling(attack),
        defense: scaling(defense),
        health: scaling(health),
    }
}

/// A complete stats table covering all 14 unit kinds at levels 1..=10.
///
/// Values are plausible rather than balanced. Notably the spearman line has
/// Defense above Attack, so a mirror match without a wall resolves to the
/// defender.
#[must_use]
pub fn sample_stats_table() -> StatsTable {
    let mut table = StatsTable::new();

    // Infantry
    table.insert(
        UnitType::NileSpearmen,
        entry(
            ResourceCost::new(50, 30, 10, 0),
            ResourceCost::new(10, 6, 2, 0),
            (10.0, 0.5),
            (20.0, 2.0),
            (10.0, 1.0),
            (14.0, 2.0),
            (50.0, 5.0),
        ),
    );
    table.insert(
        UnitType::Slingers,
        entry(
            ResourceCost::new(30, 20, 5, 5),
            ResourceCost::new(6, 4, 1, 1),
            (11.0, 0.5),
            (10.0, 1.0),
            (12.0, 1.5),
            (6.0, 1.0),
            (35.0, 3.0),
        ),
    );
    table.insert(
        UnitType::DesertAxemen,
        entry(
            ResourceCost::new(60, 25, 20, 0),
            ResourceCost::new(12, 5, 4, 0),
            (8.0, 0.5),
            (15.0, 1.5),
            (16.0, 2.0),
            (9.0, 1.0),
            (60.0, 6.0),
        ),
    );
    table.insert(
        UnitType::PharaohsBowmen,
        entry(
            ResourceCost::new(40, 60, 5, 0),
            ResourceCost::new(8, 12, 1, 0),
            (9.0, 0.5),
            (12.0, 1.0),
            (18.0, 2.0),
            (7.0, 1.0),
            (40.0, 4.0),
        ),
    );

    // Cavalry
    table.insert(
        UnitType::Chariots,
        entry(
            ResourceCost::new(120, 80, 40, 0),
            ResourceCost::new(24, 16, 8, 0),
            (18.0, 1.0),
            (30.0, 2.0),
            (24.0, 2.5),
            (12.0, 1.5),
            (80.0, 8.0),
        ),
    );
    table.insert(
        UnitType::NubianCavalry,
        entry(
            ResourceCost::new(140, 50, 45, 0),
            ResourceCost::new(28, 10, 9, 0),
            (16.0, 1.0),
            (25.0, 2.0),
            (22.0, 2.0),
            (14.0, 2.0),
            (90.0, 9.0),
        ),
    );
    table.insert(
        UnitType::CamelArchers,
        entry(
            ResourceCost::new(110, 70, 30, 0),
            ResourceCost::new(22, 14, 6, 0),
            (15.0, 1.0),
            (20.0, 1.5),
            (20.0, 2.0),
            (10.0, 1.0),
            (70.0, 7.0),
        ),
    );
    table.insert(
        UnitType::WarElephants,
        entry(
            ResourceCost::new(250, 100, 60, 20),
            ResourceCost::new(50, 20, 12, 4),
            (7.0, 0.5),
            (50.0, 4.0),
            (30.0, 3.0),
            (20.0, 2.5),
            (160.0, 16.0),
        ),
    );

    // Siege
    table.insert(
        UnitType::SiegeTower,
        entry(
            ResourceCost::new(0, 300, 80, 60),
            ResourceCost::new(0, 60, 16, 12),
            (4.0, 0.0),
            (0.0, 0.0),
            (12.0, 1.0),
            (25.0, 3.0),
            (200.0, 20.0),
        ),
    );
    table.insert(
        UnitType::Catapult,
        entry(
            ResourceCost::new(0, 250, 120, 80),
            ResourceCost::new(0, 50, 24, 16),
            (3.0, 0.0),
            (0.0, 0.0),
            (40.0, 4.0),
            (8.0, 1.0),
            (120.0, 10.0),
        ),
    );
    table.insert(
        UnitType::Scout,
        entry(
            ResourceCost::new(20, 10, 5, 0),
            ResourceCost::new(4, 2, 1, 0),
            (22.0, 1.0),
            (5.0, 0.5),
            (4.0, 0.5),
            (3.0, 0.5),
            (25.0, 2.0),
        ),
    );
    table.insert(
        UnitType::TunnelDiggers,
        entry(
            ResourceCost::new(40, 80, 60, 40),
            ResourceCost::new(8, 16, 12, 8),
            (5.0, 0.0),
            (10.0, 1.0),
            (15.0, 1.5),
            (6.0, 1.0),
            (70.0, 6.0),
        ),
    );

    // Utility / market - never fielded, but the table covers every kind.
    table.insert(
        UnitType::Trapper,
        entry(
            ResourceCost::new(25, 40, 10, 5),
            ResourceCost::new(5, 8, 2, 1),
            (9.0, 0.5),
            (10.0, 1.0),
            (5.0, 0.5),
            (8.0, 1.0),
            (30.0, 3.0),
        ),
    );
    table.insert(
        UnitType::Caravan,
        entry(
            ResourceCost::new(80, 60, 20, 10),
            ResourceCost::new(16, 12, 4, 2),
            (12.0, 0.5),
            (200.0, 20.0),
            (2.0, 0.0),
            (4.0, 0.5),
            (45.0, 4.0),
        ),
    );

    table
}
