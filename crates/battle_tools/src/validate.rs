//! Unit stats data validation.
//!
//! The resolver fails fast at runtime when the table has gaps; this
//! validator catches the same gaps at data-edit time, before a table ships.
//! It checks the completeness contract the resolver relies on: every
//! battle-roster kind present, a positive level range, and exactly one cost
//! row per level.

use std::path::Path;

use thiserror::Error;

use battle_core::math::Fixed;
use battle_core::stats::StatsTable;
use battle_core::units::UnitType;

/// A single validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A battle-roster kind has no entry at all.
    #[error("{unit:?}: no stats entry")]
    MissingUnit {
        /// The absent kind.
        unit: UnitType,
    },

    /// `max_level` must cover at least level 1.
    #[error("{unit:?}: max_level is 0")]
    ZeroMaxLevel {
        /// The offending kind.
        unit: UnitType,
    },

    /// The cost list length must equal `max_level`.
    #[error("{unit:?}: {rows} cost rows for max_level {max_level}")]
    CostRowMismatch {
        /// The offending kind.
        unit: UnitType,
        /// Rows found.
        rows: usize,
        /// Rows required.
        max_level: u32,
    },
}

/// Collected outcome of validating one table.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Hard failures; the table must not ship with any.
    pub errors: Vec<ValidationError>,
    /// Suspicious-but-legal findings, logged as warnings.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when no hard failures were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate an in-memory stats table.
#[must_use]
pub fn validate_table(table: &StatsTable) -> ValidationReport {
    let mut report = ValidationReport::default();

    for unit in UnitType::BATTLE_ROSTER {
        let Ok(stats) = table.get(unit) else {
            report.errors.push(ValidationError::MissingUnit { unit });
            continue;
        };

        if stats.max_level == 0 {
            report.errors.push(ValidationError::ZeroMaxLevel { unit });
        }
        if stats.costs.len() != stats.max_level as usize {
            report.errors.push(ValidationError::CostRowMismatch {
                unit,
                rows: stats.costs.len(),
                max_level: stats.max_level,
            });
        }

        // Zero base Health makes every stack of this kind evaporate in
        // step 5 of resolution. Legal, but almost certainly a data bug.
        if stats.health.base == Fixed::ZERO {
            report
                .warnings
                .push(format!("{unit:?}: base Health is 0, stacks cannot survive"));
        }
    }

    report
}

/// Error from validating a file on disk.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The file did not load or parse.
    #[error(transparent)]
    Load(#[from] battle_core::error::BattleError),
    /// The table loaded but failed completeness checks.
    #[error("{count} validation error(s): {details}")]
    Invalid {
        /// Number of failures.
        count: usize,
        /// Semicolon-joined failure messages.
        details: String,
    },
}

/// Validate a stats RON file on disk.
///
/// Warnings are logged; hard failures become an error.
pub fn validate_file(path: &Path) -> Result<ValidationReport, ValidateError> {
    let table = StatsTable::load(path)?;
    let report = validate_table(&table);
    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }
    if report.is_valid() {
        Ok(report)
    } else {
        let details: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
        Err(ValidateError::Invalid {
            count: report.errors.len(),
            details: details.join("; "),
        })
    }
}
