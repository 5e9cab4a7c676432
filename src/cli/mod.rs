//! CLI command handlers
//!
//! Each submodule pairs a clap `Subcommand` enum with a `handle_*_command`
//! function that drives the [`LedgerEngine`](crate::ledger::LedgerEngine).

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod report;
pub mod template;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use template::{handle_template_command, TemplateCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerEngine;
use crate::models::{AccountId, Money, TransactionType};

/// Parse a user-entered amount such as `50000`, `50.000` or `1,250,000`
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

/// Parse `YYYY-MM-DD`, defaulting to today
pub(crate) fn parse_date(input: Option<&str>) -> LedgerResult<NaiveDate> {
    match input {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
        }),
        None => Ok(today()),
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn parse_kind(input: &str) -> LedgerResult<TransactionType> {
    TransactionType::parse(input).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid transaction type '{}'. Use 'income' or 'expense'",
            input
        ))
    })
}

/// Resolve an optional account reference, falling back to the first account
pub(crate) fn account_or_first(
    engine: &LedgerEngine,
    reference: Option<&str>,
) -> LedgerResult<AccountId> {
    match reference {
        Some(r) => Ok(engine.find_account(r)?.id),
        None => engine
            .accounts()
            .first()
            .map(|a| a.id)
            .ok_or_else(|| LedgerError::Validation("No accounts exist".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_separators() {
        assert_eq!(parse_amount("1.000.000").unwrap().units(), 1_000_000);
        assert_eq!(parse_amount("1,000,000").unwrap().units(), 1_000_000);
        assert!(parse_amount("ten").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2025-06-30")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
        assert!(parse_date(Some("30/06/2025")).is_err());
        assert_eq!(parse_date(None).unwrap(), today());
    }
}
