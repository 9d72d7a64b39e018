//! Resolution benchmarks for battle_core.
//!
//! Run with: `cargo bench -p battle_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use battle_core::battle::{resolve, BattleUnit, BattleVariant};
use battle_core::units::UnitType;
use battle_test_utils::fixtures::sample_stats_table;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmarks a full-roster resolution for both variants.
pub fn resolution_benchmark(c: &mut Criterion) {
    let table = sample_stats_table();
    let attacker: Vec<BattleUnit> = UnitType::BATTLE_ROSTER
        .iter()
        .map(|&unit| BattleUnit::new(unit, 250, 5))
        .collect();
    let defender: Vec<BattleUnit> = UnitType::BATTLE_ROSTER
        .iter()
        .map(|&unit| BattleUnit::new(unit, 200, 7))
        .collect();

    c.bench_function("resolve_v1_full_roster", |b| {
        b.iter(|| {
            resolve(
                black_box(&attacker),
                black_box(&defender),
                black_box(40),
                &table,
                BattleVariant::V1,
            )
        })
    });

    c.bench_function("resolve_v2_full_roster", |b| {
        b.iter(|| {
            resolve(
                black_box(&attacker),
                black_box(&defender),
                black_box(40),
                &table,
                BattleVariant::V2,
            )
        })
    });
}

criterion_group!(benches, resolution_benchmark);
criterion_main!(benches);
