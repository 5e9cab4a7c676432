//! Budget CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;
use crate::reports::BudgetOverviewReport;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a category's limit (0 removes the budget)
    Set {
        /// Category name
        category: String,
        /// Limit amount
        amount: String,
    },
    /// Show spending against every budget
    Show,
}

pub fn handle_budget_command(
    engine: &mut LedgerEngine,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let limit = parse_amount(&amount)?;
            engine.set_budget(&category, limit)?;
            if limit.is_zero() {
                println!("Removed budget for {}", category.trim());
            } else {
                println!(
                    "Budget for {} set to {}",
                    category.trim(),
                    settings.format_money(limit)
                );
            }
        }

        BudgetCommands::Show => {
            let report = BudgetOverviewReport::generate(engine.snapshot());
            println!("{}", report.format_terminal(settings));
        }
    }

    Ok(())
}
