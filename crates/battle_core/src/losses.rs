//! Resource-loss derivation from survivor counts.
//!
//! Every unit lost cost its side the resources that built it. This module
//! turns a resolved roster back into a 4-component resource bill.

use crate::battle::BattleUnitReport;
use crate::error::Result;
use crate::stats::{ResourceCost, StatsTable};

/// Resources lost by a single resolved stack.
///
/// `(amount - remaining)` units, each at the stack's level cost.
pub fn stack_losses(report: &BattleUnitReport, table: &StatsTable) -> Result<ResourceCost> {
    let per_unit = table.cost(report.unit, report.level)?;
    Ok(per_unit * report.lost())
}

/// Resources lost by a whole resolved roster.
pub fn roster_losses(reports: &[BattleUnitReport], table: &StatsTable) -> Result<ResourceCost> {
    let mut total = ResourceCost::ZERO;
    for report in reports {
        total += stack_losses(report, table)?;
    }
    Ok(total)
}
