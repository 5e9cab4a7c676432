//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_kind, today};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{DateWindow, LedgerEngine, TransactionFilter};
use crate::models::{TransactionDraft, TransactionType, INCOME_CATEGORY};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Account name or ID
        account: String,
        /// income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Positive amount
        amount: String,
        /// What the money was for
        description: String,
        /// Category (income defaults to "Income")
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Date window: all, 7d, 30d
        #[arg(short, long, default_value = "all")]
        window: String,
        /// Only this account
        #[arg(short, long)]
        account: Option<String>,
        /// Maximum rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one transaction
    Show {
        /// Transaction ID (prefix accepted)
        id: String,
    },
    /// Change fields of a transaction
    Edit {
        /// Transaction ID (prefix accepted)
        id: String,
        #[arg(short, long)]
        account: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short = 'm', long)]
        amount: Option<String>,
        #[arg(short = 'n', long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction and reverse its balance effect
    Delete {
        /// Transaction ID (prefix accepted)
        id: String,
    },
}

pub fn handle_transaction_command(
    engine: &mut LedgerEngine,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            account,
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let kind = parse_kind(&kind)?;
            let category = match (kind, category) {
                (_, Some(category)) => category,
                (TransactionType::Income, None) => INCOME_CATEGORY.to_string(),
                (TransactionType::Expense, None) => String::new(),
            };
            let draft = TransactionDraft::new(
                kind,
                description,
                parse_amount(&amount)?,
                category,
                parse_date(date.as_deref())?,
                engine.find_account(&account)?.id,
            );

            let txn = engine.add_transaction(draft)?;
            println!(
                "Recorded {} {} ({})",
                txn.kind.to_string().to_lowercase(),
                settings.format_money(txn.amount),
                txn.id.short()
            );
        }

        TransactionCommands::List {
            search,
            window,
            account,
            limit,
        } => {
            let window = DateWindow::parse(&window).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid window '{}'. Use all, 7d or 30d",
                    window
                ))
            })?;

            let mut filter = TransactionFilter::new(today()).window(window);
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(account) = account {
                filter = filter.account(engine.find_account(&account)?.id);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let rows = filter.apply(engine.transactions());
            print!(
                "{}",
                format_transaction_register(&rows, engine.accounts(), settings)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = engine.find_transaction(&id)?;
            print!(
                "{}",
                format_transaction_details(txn, engine.accounts(), settings)
            );
        }

        TransactionCommands::Edit {
            id,
            account,
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let existing = engine.find_transaction(&id)?;
            let txn_id = existing.id;
            let mut draft = existing.to_draft();

            if let Some(account) = account {
                draft.account_id = engine.find_account(&account)?.id;
            }
            if let Some(kind) = kind {
                draft.kind = parse_kind(&kind)?;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(date) = date {
                draft.date = parse_date(Some(date.as_str()))?;
            }

            let updated = engine.update_transaction(txn_id, draft)?;
            println!("Updated transaction {}", updated.id.short());
        }

        TransactionCommands::Delete { id } => {
            let txn_id = engine.find_transaction(&id)?.id;
            let removed = engine.delete_transaction(txn_id)?;
            println!(
                "Deleted transaction {} ({})",
                removed.id.short(),
                removed.description
            );
        }
    }

    Ok(())
}
