//! Account CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::format_account_list;
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List accounts with balances
    List,
    /// Create a new account
    Add {
        /// Account name
        name: String,
        /// Opening balance (e.g., "1500000" or "1.500.000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Delete an account; its transactions stay in the history
    Delete {
        /// Account name or ID
        account: String,
    },
}

pub fn handle_account_command(
    engine: &mut LedgerEngine,
    settings: &Settings,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    match cmd {
        AccountCommands::List => {
            print!("{}", format_account_list(engine.accounts(), settings));
        }

        AccountCommands::Add { name, balance } => {
            let opening = parse_amount(&balance)?;
            let account = engine.add_account(&name, opening)?;
            println!("Created account: {}", account.name);
            println!("  Opening balance: {}", settings.format_money(account.balance));
            println!("  ID: {}", account.id);
        }

        AccountCommands::Delete { account } => {
            let id = engine.find_account(&account)?.id;
            let removed = engine.delete_account(id)?;
            println!("Deleted account: {}", removed.name);
        }
    }

    Ok(())
}
