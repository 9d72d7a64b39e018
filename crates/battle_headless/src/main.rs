//! Headless battle runner.
//!
//! Resolves a scenario (two rosters + wall bonus) against a stats table and
//! prints the outcome. Designed for balance testing and CI.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a built-in preset
//! cargo run -p battle_headless -- resolve --scenario spearmen_clash
//!
//! # Resolve a scenario file with the original apportionment rule, as JSON
//! cargo run -p battle_headless -- resolve --scenario scenarios/walled_assault.ron \
//!     --variant v1 --json
//!
//! # Run both variants side by side
//! cargo run -p battle_headless -- compare --scenario scenarios/walled_assault.ron
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use battle_core::battle::{resolve, BattleVariant};
use battle_core::stats::StatsTable;
use battle_headless::report::{render_text, variant_name, JsonReport};
use battle_headless::scenario::{Scenario, ScenarioError};

#[derive(Parser)]
#[command(name = "battle_headless")]
#[command(about = "Headless battle runner for balance testing and CI")]
#[command(version)]
struct Cli {
    /// Path to the unit stats table
    #[arg(long, global = true, default_value = "assets/data/unit_stats.ron")]
    stats: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Apportionment variant selector.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum VariantArg {
    /// Original rule (double discount)
    V1,
    /// HP-weighted rule
    #[default]
    V2,
}

impl From<VariantArg> for BattleVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::V1 => BattleVariant::V1,
            VariantArg::V2 => BattleVariant::V2,
        }
    }
}

impl std::fmt::Display for VariantArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(variant_name(BattleVariant::from(*self)))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single scenario
    Resolve {
        /// Scenario file, or the name of a built-in preset
        #[arg(short, long, default_value = "spearmen_clash")]
        scenario: String,

        /// Apportionment variant
        #[arg(long, value_enum, default_value_t = VariantArg::V2)]
        variant: VariantArg,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a scenario with both variants and print both reports
    Compare {
        /// Scenario file, or the name of a built-in preset
        #[arg(short, long, default_value = "spearmen_clash")]
        scenario: String,
    },
}

/// Presets take precedence; anything else is treated as a file path.
fn load_scenario(arg: &str) -> Result<Scenario, ScenarioError> {
    if let Some(preset) = Scenario::preset(arg) {
        Ok(preset)
    } else {
        Scenario::load(Path::new(arg))
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let table = StatsTable::load(&cli.stats)?;

    match &cli.command {
        Commands::Resolve {
            scenario,
            variant,
            json,
        } => {
            let scenario = load_scenario(scenario)?;
            let variant = BattleVariant::from(*variant);
            tracing::info!(name = %scenario.name, variant = variant_name(variant), "resolving");

            let summary = resolve(
                &scenario.attacker,
                &scenario.defender,
                scenario.wall_defense_bonus,
                &table,
                variant,
            )?;

            if *json {
                let report = JsonReport::new(&scenario.name, variant, &summary, &table)?;
                println!("{}", report.to_json_pretty());
            } else {
                println!("{}", render_text(&scenario.name, variant, &summary, &table)?);
            }
        }

        Commands::Compare { scenario } => {
            let scenario = load_scenario(scenario)?;
            for variant in [BattleVariant::V1, BattleVariant::V2] {
                let summary = resolve(
                    &scenario.attacker,
                    &scenario.defender,
                    scenario.wall_defense_bonus,
                    &table,
                    variant,
                )?;
                println!("{}\n", render_text(&scenario.name, variant, &summary, &table)?);
            }
        }
    }

    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("Resolution failed: {e}");
        std::process::exit(1);
    }
}
