//! Error types for battle resolution.

use crate::units::UnitType;
use thiserror::Error;

/// Result type alias using [`BattleError`].
pub type Result<T> = std::result::Result<T, BattleError>;

/// Top-level error type for all battle resolution errors.
///
/// A resolution either fully succeeds or fails with one of these; there are
/// no silently-partial summaries. Missing stats-table entries are treated as
/// configuration errors and reject the whole call rather than defaulting to
/// zero stats.
#[derive(Debug, Error)]
pub enum BattleError {
    /// The stats table has no entry for this unit kind.
    #[error("No stats entry for unit kind {unit:?}")]
    MissingUnitStats {
        /// Unit kind that was looked up.
        unit: UnitType,
    },

    /// The stats table covers this unit kind, but not the requested level.
    #[error("Stats for {unit:?} cover levels 1..={max_level}, requested level {level}")]
    LevelOutOfRange {
        /// Unit kind that was looked up.
        unit: UnitType,
        /// Requested level.
        level: u32,
        /// Highest level the table covers for this kind.
        max_level: u32,
    },

    /// Aggregated roster totals left the fixed-point range.
    #[error("Roster too large: {quantity} exceeds the supported numeric range")]
    RosterTooLarge {
        /// Which aggregated quantity left the range.
        quantity: &'static str,
    },

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path showing the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Data file could not be read.
    #[error("Failed to read data file '{path}': {source}")]
    DataReadError {
        /// Path showing the file that failed to load.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
