//! Scenario loading and configuration.
//!
//! Scenarios define one battle: the two rosters and the wall defense bonus.
//! They are RON files so balance testers can keep a library of named setups
//! next to the stats table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use battle_core::battle::BattleUnit;
use battle_core::units::UnitType;

/// Error type for scenario operations.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

/// A complete battle scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Attacking roster.
    pub attacker: Vec<BattleUnit>,
    /// Defending roster.
    pub defender: Vec<BattleUnit>,
    /// Flat defense bonus applied to every defender unit.
    #[serde(default)]
    pub wall_defense_bonus: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::spearmen_clash()
    }
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = ron::from_str(&contents)?;
        Ok(scenario)
    }

    /// Load from a RON string (useful for embedded scenarios).
    pub fn from_ron_str(ron: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = ron::from_str(ron)?;
        Ok(scenario)
    }

    /// The baseline mirror match: 100 spearmen against 100 spearmen.
    #[must_use]
    pub fn spearmen_clash() -> Self {
        Self {
            name: "Spearmen Clash".to_string(),
            description: "Mirror match of level-1 spearmen on open ground".to_string(),
            attacker: vec![BattleUnit::new(UnitType::NileSpearmen, 100, 1)],
            defender: vec![BattleUnit::new(UnitType::NileSpearmen, 100, 1)],
            wall_defense_bonus: 0,
        }
    }

    /// A combined-arms assault on a walled defender.
    #[must_use]
    pub fn walled_assault() -> Self {
        Self {
            name: "Walled Assault".to_string(),
            description: "Mixed attacker against walled spearmen and siege towers".to_string(),
            attacker: vec![
                BattleUnit::new(UnitType::DesertAxemen, 80, 2),
                BattleUnit::new(UnitType::PharaohsBowmen, 60, 2),
                BattleUnit::new(UnitType::Chariots, 30, 1),
                BattleUnit::new(UnitType::Catapult, 8, 1),
            ],
            defender: vec![
                BattleUnit::new(UnitType::NileSpearmen, 120, 2),
                BattleUnit::new(UnitType::Slingers, 50, 1),
                BattleUnit::new(UnitType::SiegeTower, 4, 3),
            ],
            wall_defense_bonus: 25,
        }
    }

    /// Look up a built-in preset by name.
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "spearmen_clash" => Some(Self::spearmen_clash()),
            "walled_assault" => Some(Self::walled_assault()),
            _ => None,
        }
    }
}
