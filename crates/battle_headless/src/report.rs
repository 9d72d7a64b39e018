//! Battle outcome reporting.
//!
//! Turns a [`BattleSummary`] into the figures the original battle screen
//! showed: winner, overall and per-category win shares, surviving counts
//! per stack, and the resource bill for each side's casualties.
//!
//! Win shares are converted to `f64` here, at the presentation boundary
//! only; all resolution math stays fixed-point.

use serde::Serialize;

use battle_core::battle::{BattleSummary, BattleUnitReport, BattleVariant, SideTotals};
use battle_core::error::Result;
use battle_core::losses::roster_losses;
use battle_core::math::Fixed;
use battle_core::stats::{ResourceCost, StatsTable};
use battle_core::units::AttackCategory;

/// Short name for a variant, for report headers and filenames.
#[must_use]
pub const fn variant_name(variant: BattleVariant) -> &'static str {
    match variant {
        BattleVariant::V1 => "v1",
        BattleVariant::V2 => "v2",
    }
}

fn as_f64(value: Fixed) -> f64 {
    value.to_num()
}

/// One side of a JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSide {
    /// Overall win share, 0-100.
    pub total_win: f64,
    /// Per-category breakdown.
    pub categories: Vec<JsonCategory>,
    /// Per-stack outcome.
    pub units: Vec<JsonStack>,
    /// Resources lost to casualties.
    pub losses: ResourceCost,
}

/// Per-category figures for one side.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCategory {
    /// Category name.
    pub category: &'static str,
    /// Total starting hit points.
    pub hp: f64,
    /// Surviving hit points.
    pub remaining_hp: f64,
    /// Offensive strength in this category's contest.
    pub attack: f64,
    /// Win share, 0-100.
    pub win: f64,
}

/// Per-stack outcome line.
#[derive(Debug, Clone, Serialize)]
pub struct JsonStack {
    /// Display name of the unit kind.
    pub unit: &'static str,
    /// Units fielded.
    pub amount: u32,
    /// Upgrade level.
    pub level: u32,
    /// Units surviving.
    pub remaining: u32,
    /// Units lost.
    pub lost: u32,
}

/// Machine-readable battle report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Scenario name.
    pub scenario: String,
    /// Which apportionment variant resolved this battle.
    pub variant: &'static str,
    /// True iff the attacker won.
    pub attacker_wins: bool,
    /// Attacker figures.
    pub attacker: JsonSide,
    /// Defender figures.
    pub defender: JsonSide,
}

fn json_side(
    side: &SideTotals,
    total_win: Fixed,
    units: &[BattleUnitReport],
    table: &StatsTable,
) -> Result<JsonSide> {
    let categories = AttackCategory::ALL
        .iter()
        .map(|&category| {
            let totals = side.get(category);
            JsonCategory {
                category: category.name(),
                hp: as_f64(totals.hp),
                remaining_hp: as_f64(totals.remaining_hp),
                attack: as_f64(totals.attack),
                win: as_f64(totals.win),
            }
        })
        .collect();
    let unit_lines = units
        .iter()
        .map(|report| JsonStack {
            unit: report.unit.display_name(),
            amount: report.amount,
            level: report.level,
            remaining: report.remaining,
            lost: report.lost(),
        })
        .collect();
    Ok(JsonSide {
        total_win: as_f64(total_win),
        categories,
        units: unit_lines,
        losses: roster_losses(units, table)?,
    })
}

impl JsonReport {
    /// Build a report from a resolved battle.
    pub fn new(
        scenario: &str,
        variant: BattleVariant,
        summary: &BattleSummary,
        table: &StatsTable,
    ) -> Result<Self> {
        Ok(Self {
            scenario: scenario.to_string(),
            variant: variant_name(variant),
            attacker_wins: summary.success,
            attacker: json_side(
                &summary.attacker,
                summary.attacker_total_win,
                &summary.attacker_units,
                table,
            )?,
            defender: json_side(
                &summary.defender,
                summary.defender_total_win,
                &summary.defender_units,
                table,
            )?,
        })
    }

    /// Pretty-printed JSON.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the report contains no non-string map keys
    /// or other unserializable shapes.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

fn side_lines(label: &str, side: &JsonSide, lines: &mut Vec<String>) {
    lines.push(format!("{label} (win share {:.2}%)", side.total_win));
    for cat in &side.categories {
        if cat.hp == 0.0 && cat.attack == 0.0 {
            continue;
        }
        lines.push(format!(
            "  {:<8} hp {:>10.1} -> {:>10.1}   strength {:>10.1}   win {:>6.2}%",
            cat.category, cat.hp, cat.remaining_hp, cat.attack, cat.win
        ));
    }
    for unit in &side.units {
        lines.push(format!(
            "  {:<16} lvl {:<2} {:>5} fielded  {:>5} remain  {:>5} lost",
            unit.unit, unit.level, unit.amount, unit.remaining, unit.lost
        ));
    }
    let l = &side.losses;
    lines.push(format!(
        "  losses: food {} / wood {} / ore {} / stone {}",
        l.food, l.wood, l.ore, l.stone
    ));
}

/// Render a human-readable battle report.
pub fn render_text(
    scenario: &str,
    variant: BattleVariant,
    summary: &BattleSummary,
    table: &StatsTable,
) -> Result<String> {
    let report = JsonReport::new(scenario, variant, summary, table)?;
    let mut lines = Vec::new();
    lines.push(format!(
        "Battle: {scenario} ({})",
        variant_name(variant)
    ));
    lines.push(format!(
        "Winner: {}",
        if summary.success { "attacker" } else { "defender" }
    ));
    side_lines("Attacker", &report.attacker, &mut lines);
    side_lines("Defender", &report.defender, &mut lines);
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::battle::{resolve_v2, BattleUnit};
    use battle_core::units::UnitType;
    use battle_test_utils::fixtures::sample_stats_table;

    fn resolved() -> (BattleSummary, StatsTable) {
        let table = sample_stats_table();
        let attacker = [BattleUnit::new(UnitType::PharaohsBowmen, 60, 2)];
        let defender = [BattleUnit::new(UnitType::NileSpearmen, 80, 1)];
        let summary = resolve_v2(&attacker, &defender, 10, &table).unwrap();
        (summary, table)
    }

    #[test]
    fn test_text_report_names_winner_and_units() {
        let (summary, table) = resolved();
        let text = render_text("test", BattleVariant::V2, &summary, &table).unwrap();
        assert!(text.contains("Winner:"));
        assert!(text.contains("Pharaohs Bowmen"));
        assert!(text.contains("Nile Spearmen"));
        assert!(text.contains("losses:"));
    }

    #[test]
    fn test_json_report_shares_sum_to_hundred() {
        let (summary, table) = resolved();
        let report = JsonReport::new("test", BattleVariant::V2, &summary, &table).unwrap();
        let sum = report.attacker.total_win + report.defender.total_win;
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(report.variant, "v2");
    }

    #[test]
    fn test_json_serializes() {
        let (summary, table) = resolved();
        let report = JsonReport::new("test", BattleVariant::V1, &summary, &table).unwrap();
        let json = report.to_json_pretty();
        assert!(json.contains("\"attacker_wins\""));
        assert!(json.contains("\"categories\""));
    }
}
