//! Transaction template CLI commands

use clap::Subcommand;

use super::{account_or_first, parse_amount, parse_date, parse_kind};
use crate::config::Settings;
use crate::display::format_template_list;
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;
use crate::models::RecurringTemplate;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List saved templates
    List,
    /// Save a template
    Add {
        /// Description used for every transaction made from it
        description: String,
        /// income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount
        amount: String,
        /// Category (ignored for income)
        #[arg(short, long)]
        category: Option<String>,
        /// Account (defaults to the first account)
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Record a transaction from a template
    Use {
        /// Template description or ID
        template: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a template
    Delete {
        /// Template description or ID
        template: String,
    },
}

pub fn handle_template_command(
    engine: &mut LedgerEngine,
    settings: &Settings,
    cmd: TemplateCommands,
) -> LedgerResult<()> {
    match cmd {
        TemplateCommands::List => {
            print!(
                "{}",
                format_template_list(engine.templates(), engine.accounts(), settings)
            );
        }

        TemplateCommands::Add {
            description,
            kind,
            amount,
            category,
            account,
        } => {
            let template = RecurringTemplate::new(
                parse_kind(&kind)?,
                description.trim(),
                parse_amount(&amount)?,
                category,
                account_or_first(engine, account.as_deref())?,
            );
            let saved = engine.add_template(template)?;
            println!("Saved template: {} ({})", saved.description, saved.id.short());
        }

        TemplateCommands::Use { template, date } => {
            let template_id = engine.find_template(&template)?.id;
            let txn = engine.use_template(template_id, parse_date(date.as_deref())?)?;
            println!(
                "Recorded {} {} from template ({})",
                txn.description,
                settings.format_money(txn.signed_amount()),
                txn.id.short()
            );
        }

        TemplateCommands::Delete { template } => {
            let template_id = engine.find_template(&template)?.id;
            let removed = engine.delete_template(template_id)?;
            println!("Deleted template: {}", removed.description);
        }
    }

    Ok(())
}
