//! Determinism testing utilities.
//!
//! Provides a harness for verifying that battle resolution produces
//! identical results given identical inputs.
//!
//! # Testing Strategy
//!
//! Resolution must be 100% deterministic: it is a pure function of the
//! rosters, the wall bonus, and the stats-table snapshot. Sources of
//! non-determinism to watch for:
//!
//! - **Floating-point math**: Different CPUs can produce different results.
//!   We use fixed-point arithmetic via [`battle_core::math::Fixed`]
//!   throughout.
//!
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   The stats table is lookup-only; output ordering follows roster input
//!   order, never map iteration.
//!
//! The harness resolves the same inputs repeatedly, serializes each
//! summary, and compares hashes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use battle_core::battle::BattleSummary;

/// Result of a determinism check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for a deterministic resolver).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that resolution was deterministic, with a detailed message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        assert!(
            self.is_deterministic,
            "Resolution was not deterministic: {} unique hashes across {} runs: {:?}",
            self.unique_hashes().len(),
            self.hashes.len(),
            self.unique_hashes()
        );
    }
}

/// Hash a battle summary via its serialized form.
///
/// # Panics
///
/// Panics if the summary fails to serialize (test-only code path).
#[must_use]
pub fn summary_hash(summary: &BattleSummary) -> u64 {
    let text = ron::to_string(summary).expect("summary serialization");
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

/// Run a resolution closure `runs` times and compare output hashes.
pub fn check_determinism<F>(runs: usize, mut resolve: F) -> DeterminismResult
where
    F: FnMut() -> BattleSummary,
{
    let hashes: Vec<u64> = (0..runs).map(|_| summary_hash(&resolve())).collect();
    let is_deterministic = hashes.windows(2).all(|pair| pair[0] == pair[1]);
    DeterminismResult {
        is_deterministic,
        hashes,
    }
}
