//! Walletbook - personal finance ledger
//!
//! This library keeps a user's accounts, transactions, budgets, categories,
//! savings goals and transaction templates consistent with each other. Every
//! transaction mutation carries its balance adjustment, and both are committed
//! to storage as one unit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, goals, etc.)
//! - `ledger`: Balance rules and the engine that commits them
//! - `storage`: Persistence adapters (document store and per-user blob)
//! - `reports`: Dashboard, budget, monthly and trend aggregation
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use walletbook::config::{Settings, WalletPaths};
//! use walletbook::ledger::LedgerEngine;
//! use walletbook::storage::open_adapter;
//!
//! let paths = WalletPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let user = settings.resolve_user(None)?;
//! let engine = LedgerEngine::open(user, open_adapter(&paths, &settings)?)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
