//! Storage layer for walletbook
//!
//! The ledger talks to storage only through [`PersistenceAdapter`]. Two
//! adapters ship with the crate, both built on atomic JSON file writes:
//!
//! - [`DocumentStore`]: one document per entity, multi-document commits
//!   made atomic through a batch journal
//! - [`BlobStore`]: one JSON blob per user, rewritten whole on every commit
//!
//! The adapter is picked once at startup from [`Settings`](crate::config::Settings).

pub mod blob;
pub mod document;
pub mod file_io;
pub mod snapshot;
pub mod unit_of_work;

pub use blob::BlobStore;
pub use document::DocumentStore;
pub use file_io::{read_json, write_json_atomic};
pub use snapshot::Snapshot;
pub use unit_of_work::{Mutation, UnitOfWork};

use crate::config::paths::WalletPaths;
use crate::config::settings::{Backend, Settings};
use crate::error::LedgerResult;
use crate::models::{
    Account, AccountId, Budgets, Categories, Goal, GoalId, RecurringTemplate, TemplateId,
    Transaction, TransactionId, UserId,
};

/// Contract between the ledger engine and a storage backend
///
/// `commit` must apply all mutations of a unit of work or none of them. The
/// single-entity helpers are one-mutation commits.
pub trait PersistenceAdapter {
    /// Short backend name for logs and `config` output
    fn name(&self) -> &'static str;

    /// Bulk fetch of a user's partition at session start
    fn load_all(&self, user: &UserId) -> LedgerResult<Snapshot>;

    /// Durably apply a unit of work
    fn commit(&self, user: &UserId, work: &UnitOfWork) -> LedgerResult<()>;

    fn save_transaction(&self, user: &UserId, txn: &Transaction) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().put_transaction(txn.clone()))
    }

    fn delete_transaction(&self, user: &UserId, id: TransactionId) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().delete_transaction(id))
    }

    fn save_account(&self, user: &UserId, account: &Account) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().put_account(account.clone()))
    }

    fn delete_account(&self, user: &UserId, id: AccountId) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().delete_account(id))
    }

    fn save_goal(&self, user: &UserId, goal: &Goal) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().put_goal(goal.clone()))
    }

    fn delete_goal(&self, user: &UserId, id: GoalId) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().delete_goal(id))
    }

    fn save_budgets(&self, user: &UserId, budgets: &Budgets) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().put_budgets(budgets.clone()))
    }

    fn save_categories(&self, user: &UserId, categories: &Categories) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().put_categories(categories.clone()))
    }

    fn save_template(&self, user: &UserId, template: &RecurringTemplate) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().put_template(template.clone()))
    }

    fn delete_template(&self, user: &UserId, id: TemplateId) -> LedgerResult<()> {
        self.commit(user, &UnitOfWork::new().delete_template(id))
    }
}

/// Build the adapter selected in settings
pub fn open_adapter(
    paths: &WalletPaths,
    settings: &Settings,
) -> LedgerResult<Box<dyn PersistenceAdapter>> {
    paths.ensure_directories()?;

    let adapter: Box<dyn PersistenceAdapter> = match settings.backend {
        Backend::Document => Box::new(DocumentStore::new(paths.documents_dir())),
        Backend::Blob => Box::new(BlobStore::new(paths.blobs_dir())),
    };

    tracing::debug!(backend = adapter.name(), "persistence adapter selected");
    Ok(adapter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_adapter_follows_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.backend = Backend::Document;
        assert_eq!(open_adapter(&paths, &settings).unwrap().name(), "document");

        settings.backend = Backend::Blob;
        assert_eq!(open_adapter(&paths, &settings).unwrap().name(), "blob");
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_single_entity_helpers() {
        use crate::models::{Money, TransactionDraft, TransactionType};
        use chrono::NaiveDate;

        let temp_dir = TempDir::new().unwrap();
        let stores: Vec<Box<dyn PersistenceAdapter>> = vec![
            Box::new(DocumentStore::new(temp_dir.path().join("documents"))),
            Box::new(BlobStore::new(temp_dir.path().join("users"))),
        ];
        let user = UserId::new("carol").unwrap();

        for store in stores {
            let account = Account::new("Cash", Money::new(10_000));
            let txn = Transaction::from_draft(TransactionDraft::expense(
                "Lunch",
                Money::new(2_500),
                "Food",
                NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                account.id,
            ));
            let goal = Goal::new("Trip", Money::new(50_000));
            let template = RecurringTemplate::new(
                TransactionType::Income,
                "Salary",
                Money::new(80_000),
                None,
                account.id,
            );
            let mut budgets = Budgets::new();
            budgets.set("Food", Money::new(5_000)).unwrap();
            let categories = Categories::from_names(["Food", "Pets"]);

            store.save_account(&user, &account).unwrap();
            store.save_transaction(&user, &txn).unwrap();
            store.save_goal(&user, &goal).unwrap();
            store.save_template(&user, &template).unwrap();
            store.save_budgets(&user, &budgets).unwrap();
            store.save_categories(&user, &categories).unwrap();

            let loaded = store.load_all(&user).unwrap();
            assert_eq!(loaded.accounts, vec![account.clone()], "{}", store.name());
            assert_eq!(loaded.transactions, vec![txn.clone()]);
            assert_eq!(loaded.goals, vec![goal.clone()]);
            assert_eq!(loaded.recurring_templates, vec![template.clone()]);
            assert_eq!(loaded.budgets, budgets);
            assert_eq!(loaded.categories, categories);

            store.delete_transaction(&user, txn.id).unwrap();
            store.delete_goal(&user, goal.id).unwrap();
            store.delete_template(&user, template.id).unwrap();
            store.delete_account(&user, account.id).unwrap();

            let emptied = store.load_all(&user).unwrap();
            assert!(emptied.accounts.is_empty());
            assert!(emptied.transactions.is_empty());
            assert!(emptied.goals.is_empty());
            assert!(emptied.recurring_templates.is_empty());
            assert_eq!(emptied.budgets, budgets);
        }
    }
}
