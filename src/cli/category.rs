//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// Remove a category (existing transactions keep it)
    Delete {
        /// Category name
        name: String,
    },
}

pub fn handle_category_command(
    engine: &mut LedgerEngine,
    settings: &Settings,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(engine.categories(), engine.budgets(), settings)
            );
        }
        CategoryCommands::Add { name } => {
            engine.add_category(&name)?;
            println!("Added category: {}", name.trim());
        }
        CategoryCommands::Delete { name } => {
            engine.delete_category(&name)?;
            println!("Deleted category: {}", name.trim());
        }
    }

    Ok(())
}
