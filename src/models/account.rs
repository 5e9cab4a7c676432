//! Account model
//!
//! Represents a wallet-like account (bank account, e-wallet, cash) with a
//! running balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Name given to the account created for a user with no accounts
pub const DEFAULT_ACCOUNT_NAME: &str = "Main Wallet";

/// A financial account
///
/// `balance` starts at the opening balance given on creation and afterwards
/// only moves through ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "BCA", "Cash")
    pub name: String,

    /// Current balance; negative values are allowed
    pub balance: Money,
}

impl Account {
    /// Create a new account with an opening balance
    pub fn new(name: impl Into<String>, opening_balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            balance: opening_balance,
        }
    }

    /// The account every user starts with
    pub fn default_wallet() -> Self {
        Self::new(DEFAULT_ACCOUNT_NAME, Money::zero())
    }

    /// Copy of this account with a different balance
    pub fn with_balance(&self, balance: Money) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
