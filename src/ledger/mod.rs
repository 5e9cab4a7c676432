//! Ledger consistency engine
//!
//! - [`apply`]: pure create/update/delete/contribute operations that keep
//!   account balances equal to the signed sum of their transactions
//! - [`LedgerEngine`]: one user's session, committing every change through a
//!   [`PersistenceAdapter`](crate::storage::PersistenceAdapter)
//! - [`TransactionFilter`]: history search and date windows

pub mod apply;
mod engine;
mod filter;

pub use apply::{
    apply_create, apply_create_at, apply_delete, apply_update, contribute_to_goal,
    GoalContribution,
};
pub use engine::LedgerEngine;
pub use filter::{DateWindow, TransactionFilter};
