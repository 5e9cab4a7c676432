//! Transaction model
//!
//! A transaction is either income or expense. The stored amount is always
//! positive; the sign applied to the account balance comes from the type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// Category assigned to income transactions created from income templates
pub const INCOME_CATEGORY: &str = "Income";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse a transaction type from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "+" => Some(Self::Income),
            "expense" | "out" | "-" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Apply this type's sign to a positive amount
    pub fn sign(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A transaction that has not been applied to the ledger yet
///
/// Used as the input of a create and as the full replacement on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub account_id: AccountId,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        account_id: AccountId,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            amount,
            category: category.into(),
            date,
            account_id,
        }
    }

    /// Shorthand for an income draft
    pub fn income(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        account_id: AccountId,
    ) -> Self {
        Self::new(
            TransactionType::Income,
            description,
            amount,
            category,
            date,
            account_id,
        )
    }

    /// Shorthand for an expense draft
    pub fn expense(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        account_id: AccountId,
    ) -> Self {
        Self::new(
            TransactionType::Expense,
            description,
            amount,
            category,
            date,
            account_id,
        )
    }

    /// Signed effect of this draft on its account balance
    pub fn signed_amount(&self) -> Money {
        self.kind.sign(self.amount)
    }

    /// Check the field-level rules that do not need the account set
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::MissingField("description"));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingField("category"));
        }
        Ok(())
    }
}

/// A transaction recorded in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub description: String,

    /// Always positive
    pub amount: Money,

    pub category: String,

    /// Date the money moved, as entered by the user
    pub date: NaiveDate,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// When the transaction was recorded; history is ordered by this, newest first
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Finalize a draft with a fresh id and the current time
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// Finalize a draft with a fresh id and the given creation time
    pub fn from_draft_at(draft: TransactionDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            kind: draft.kind,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            account_id: draft.account_id,
            created_at,
        }
    }

    /// Replace every user-editable field, keeping id and creation time
    pub fn merged_with(&self, draft: TransactionDraft) -> Self {
        Self {
            id: self.id,
            created_at: self.created_at,
            kind: draft.kind,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            account_id: draft.account_id,
        }
    }

    /// The editable fields of this transaction as a draft
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            kind: self.kind,
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
            account_id: self.account_id,
        }
    }

    /// +amount for income, -amount for expense
    pub fn signed_amount(&self) -> Money {
        self.kind.sign(self.amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Sort a transaction history newest first by creation time
pub fn sort_history(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    MissingField(&'static str),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingField(field) => write!(f, "Transaction {} is required", field),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
