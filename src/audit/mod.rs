//! Audit logging for walletbook
//!
//! Every committed ledger change is appended to `audit.log` as one JSON line
//! with before/after values. The log is informational: a failure to write it
//! never rolls back a commit.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
