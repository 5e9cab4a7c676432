//! Core data models for walletbook
//!
//! This module contains the data structures of the finance domain: accounts,
//! transactions, budgets, categories, savings goals and templates.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod recurring;
pub mod transaction;

pub use account::{Account, DEFAULT_ACCOUNT_NAME};
pub use budget::Budgets;
pub use category::{Categories, DEFAULT_CATEGORIES};
pub use goal::{Goal, GoalStatus, SAVINGS_GOAL_CATEGORY};
pub use ids::{AccountId, GoalId, TemplateId, TransactionId, UserId};
pub use money::Money;
pub use recurring::RecurringTemplate;
pub use transaction::{
    sort_history, Transaction, TransactionDraft, TransactionType, INCOME_CATEGORY,
};
