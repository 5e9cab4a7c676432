//! Whole-partition view of one user's data

use serde::{Deserialize, Serialize};

use crate::models::{
    sort_history, Account, AccountId, Budgets, Categories, Goal, GoalId, RecurringTemplate,
    TemplateId, Transaction, TransactionId,
};

/// Everything stored for one user
///
/// Adapters hand this out from `load_all`; the ledger engine keeps one as its
/// in-memory state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Budgets,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub recurring_templates: Vec<RecurringTemplate>,
}

impl Snapshot {
    /// Put every collection in its canonical order
    ///
    /// Transactions newest first, accounts and goals by name, templates by
    /// description. Both adapters return normalized snapshots so "first
    /// account" means the same thing regardless of backend.
    pub fn normalize(&mut self) {
        sort_history(&mut self.transactions);
        self.accounts.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        self.goals
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()).then(a.id.cmp(&b.id)));
        self.recurring_templates.sort_by(|a, b| {
            a.description
                .to_lowercase()
                .cmp(&b.description.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn template(&self, id: TemplateId) -> Option<&RecurringTemplate> {
        self.recurring_templates.iter().find(|t| t.id == id)
    }
}

/// Insert `item` or replace the element with the same key
pub(crate) fn upsert_by<T, K, F>(items: &mut Vec<T>, item: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let k = key(&item);
    match items.iter_mut().find(|existing| key(existing) == k) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}
