//! Savings goal CLI commands

use clap::Subcommand;

use super::{account_or_first, parse_amount, parse_date};
use crate::config::Settings;
use crate::display::format_goal_list;
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals with progress
    List,
    /// Create a goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
    },
    /// Move money from an account into a goal
    Contribute {
        /// Goal name or ID
        goal: String,
        /// Amount to contribute
        amount: String,
        /// Source account (defaults to the first account)
        #[arg(short, long)]
        account: Option<String>,
        /// Date of the contribution (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a goal (past contributions stay in the history)
    Delete {
        /// Goal name or ID
        goal: String,
    },
}

pub fn handle_goal_command(
    engine: &mut LedgerEngine,
    settings: &Settings,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    match cmd {
        GoalCommands::List => {
            print!("{}", format_goal_list(engine.goals(), settings));
        }

        GoalCommands::Add { name, target } => {
            let goal = engine.add_goal(&name, parse_amount(&target)?)?;
            println!(
                "Created goal: {} (target {})",
                goal.name,
                settings.format_money(goal.target_amount)
            );
        }

        GoalCommands::Contribute {
            goal,
            amount,
            account,
            date,
        } => {
            let goal_id = engine.find_goal(&goal)?.id;
            let source = account_or_first(engine, account.as_deref())?;
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;

            let result = engine.contribute_to_goal(goal_id, amount, source, date)?;
            println!(
                "Saved {} for {} from {}",
                settings.format_money(amount),
                result.goal.name,
                result.account.name
            );
            println!(
                "  Progress: {} of {} ({}%)",
                settings.format_money(result.goal.current_amount),
                settings.format_money(result.goal.target_amount),
                result.goal.progress_percent()
            );
            if result.goal.is_achieved() {
                println!("  Goal achieved!");
            }
        }

        GoalCommands::Delete { goal } => {
            let goal_id = engine.find_goal(&goal)?.id;
            let removed = engine.delete_goal(goal_id)?;
            println!("Deleted goal: {}", removed.name);
        }
    }

    Ok(())
}
