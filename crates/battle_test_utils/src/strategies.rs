//! Property-based testing strategies.
//!
//! Generates rosters that stay within the sample table's coverage
//! (battle-roster kinds, levels 1..=10), so property tests exercise the
//! resolution math rather than configuration errors.

use battle_core::battle::BattleUnit;
use battle_core::units::UnitType;
use proptest::prelude::*;

use crate::fixtures::SAMPLE_MAX_LEVEL;

/// Strategy for a single battle stack.
///
/// Amounts include zero; empty stacks are legal input.
pub fn arb_battle_unit() -> impl Strategy<Value = BattleUnit> {
    (
        prop::sample::select(UnitType::BATTLE_ROSTER.to_vec()),
        0u32..500,
        1u32..=SAMPLE_MAX_LEVEL,
    )
        .prop_map(|(unit, amount, level)| BattleUnit::new(unit, amount, level))
}

/// Strategy for a roster of up to `max_stacks` stacks (possibly empty).
pub fn arb_roster(max_stacks: usize) -> impl Strategy<Value = Vec<BattleUnit>> {
    prop::collection::vec(arb_battle_unit(), 0..=max_stacks)
}

/// Strategy for a wall defense bonus.
pub fn arb_wall_bonus() -> impl Strategy<Value = u32> {
    0u32..200
}
