//! Session ledger
//!
//! `LedgerEngine` owns one user's in-memory snapshot and the persistence
//! adapter. Every mutating method follows the same steps:
//!
//! 1. validate and compute new records with the pure functions in
//!    [`apply`](super::apply), reading the current in-memory state
//! 2. submit them to the adapter as one [`UnitOfWork`]
//! 3. only after the adapter accepts the commit, apply the same unit of
//!    work to memory and append audit entries
//!
//! A failed commit therefore leaves the engine exactly as it was.

use chrono::NaiveDate;

use super::apply::{self, GoalContribution};
use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, Budgets, Categories, Goal, GoalId, Money, RecurringTemplate, TemplateId,
    Transaction, TransactionDraft, TransactionId, UserId,
};
use crate::storage::{PersistenceAdapter, Snapshot, UnitOfWork};

/// Anything that failed inside the adapter is reported as a persistence error
fn into_persistence(err: LedgerError) -> LedgerError {
    match err {
        LedgerError::Persistence(_) => err,
        other => LedgerError::Persistence(other.to_string()),
    }
}

/// Resolve a user-typed reference against a collection
///
/// Exact (case-insensitive) label matches win; otherwise the reference is
/// treated as an id prefix, which must be unambiguous.
fn resolve<'a, T>(
    items: &'a [T],
    reference: &str,
    label: impl Fn(&T) -> Option<&str>,
    id_matches: impl Fn(&T, &str) -> bool,
    not_found: impl FnOnce(String) -> LedgerError,
) -> LedgerResult<&'a T> {
    let reference = reference.trim();
    if let Some(item) = items
        .iter()
        .find(|item| label(*item).is_some_and(|l| l.eq_ignore_ascii_case(reference)))
    {
        return Ok(item);
    }

    let mut by_id = items.iter().filter(|item| id_matches(*item, reference));
    match (by_id.next(), by_id.next()) {
        (Some(item), None) => Ok(item),
        (Some(_), Some(_)) => Err(LedgerError::Validation(format!(
            "'{}' matches more than one entry; use a longer id",
            reference
        ))),
        (None, _) => Err(not_found(reference.to_string())),
    }
}

/// One user's ledger for the duration of a session
pub struct LedgerEngine {
    user: UserId,
    adapter: Box<dyn PersistenceAdapter>,
    state: Snapshot,
    audit: Option<AuditLogger>,
}

impl LedgerEngine {
    /// Load the user's partition, creating the default account when the
    /// user has none yet
    pub fn open(user: UserId, adapter: Box<dyn PersistenceAdapter>) -> LedgerResult<Self> {
        let state = adapter.load_all(&user).map_err(into_persistence)?;
        let mut engine = Self {
            user,
            adapter,
            state,
            audit: None,
        };

        if engine.state.accounts.is_empty() {
            let wallet = Account::default_wallet();
            tracing::info!(user = %engine.user, "no accounts found; creating default wallet");
            let audit = AuditEntry::create(
                EntityType::Account,
                wallet.id.to_string(),
                Some(wallet.name.clone()),
                &wallet,
            );
            engine.commit(UnitOfWork::new().put_account(wallet), vec![audit])?;
        }

        Ok(engine)
    }

    /// Attach an audit log; entries are written after each successful commit
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn backend_name(&self) -> &'static str {
        self.adapter.name()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn accounts(&self) -> &[Account] {
        &self.state.accounts
    }

    /// Transaction history, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn budgets(&self) -> &Budgets {
        &self.state.budgets
    }

    pub fn categories(&self) -> &Categories {
        &self.state.categories
    }

    pub fn goals(&self) -> &[Goal] {
        &self.state.goals
    }

    pub fn templates(&self) -> &[RecurringTemplate] {
        &self.state.recurring_templates
    }

    pub fn total_balance(&self) -> Money {
        self.state.accounts.iter().map(|a| a.balance).sum()
    }

    /// Find an account by name or id prefix
    pub fn find_account(&self, reference: &str) -> LedgerResult<&Account> {
        resolve(
            &self.state.accounts,
            reference,
            |a| Some(a.name.as_str()),
            |a, r| a.id.matches_prefix(r),
            LedgerError::account_not_found,
        )
    }

    /// Find a transaction by id prefix
    pub fn find_transaction(&self, reference: &str) -> LedgerResult<&Transaction> {
        resolve(
            &self.state.transactions,
            reference,
            |_| None,
            |t, r| t.id.matches_prefix(r),
            LedgerError::transaction_not_found,
        )
    }

    /// Find a goal by name or id prefix
    pub fn find_goal(&self, reference: &str) -> LedgerResult<&Goal> {
        resolve(
            &self.state.goals,
            reference,
            |g| Some(g.name.as_str()),
            |g, r| g.id.matches_prefix(r),
            LedgerError::goal_not_found,
        )
    }

    /// Find a template by description or id prefix
    pub fn find_template(&self, reference: &str) -> LedgerResult<&RecurringTemplate> {
        resolve(
            &self.state.recurring_templates,
            reference,
            |t| Some(t.description.as_str()),
            |t, r| t.id.matches_prefix(r),
            LedgerError::template_not_found,
        )
    }

    // ----- transactions -------------------------------------------------

    /// Record a new transaction and move its account's balance
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        let (txn, account) = apply::apply_create(draft, &self.state.accounts)?;

        let audit = AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        );
        self.commit(
            UnitOfWork::new()
                .put_transaction(txn.clone())
                .put_account(account),
            vec![audit],
        )?;

        Ok(txn)
    }

    /// Replace every editable field of a transaction
    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        replacement: TransactionDraft,
    ) -> LedgerResult<Transaction> {
        let old = self
            .state
            .transaction(id)
            .cloned()
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let (merged, accounts) = apply::apply_update(&old, replacement, &self.state.accounts)?;

        let audit = AuditEntry::update(
            EntityType::Transaction,
            merged.id.to_string(),
            Some(merged.description.clone()),
            &old,
            &merged,
        );
        let work = accounts
            .into_iter()
            .fold(UnitOfWork::new().put_transaction(merged.clone()), |work, account| {
                work.put_account(account)
            });
        self.commit(work, vec![audit])?;

        Ok(merged)
    }

    /// Remove a transaction and reverse its balance effect
    pub fn delete_transaction(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let txn = self
            .state
            .transaction(id)
            .cloned()
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let mut work = UnitOfWork::new().delete_transaction(txn.id);
        if let Some(account) = apply::apply_delete(&txn, &self.state.accounts)? {
            work = work.put_account(account);
        }

        let audit = AuditEntry::delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        );
        self.commit(work, vec![audit])?;

        Ok(txn)
    }

    // ----- goals --------------------------------------------------------

    /// Create a savings goal with no progress
    pub fn add_goal(&mut self, name: &str, target: Money) -> LedgerResult<Goal> {
        let goal = Goal::new(name.trim(), target);
        goal.validate().map_err(LedgerError::Validation)?;

        let audit = AuditEntry::create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        );
        self.commit(UnitOfWork::new().put_goal(goal.clone()), vec![audit])?;
        Ok(goal)
    }

    /// Delete a goal; past contribution transactions stay in the history
    pub fn delete_goal(&mut self, id: GoalId) -> LedgerResult<Goal> {
        let goal = self
            .state
            .goal(id)
            .cloned()
            .ok_or_else(|| LedgerError::goal_not_found(id.to_string()))?;

        let audit = AuditEntry::delete(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        );
        self.commit(UnitOfWork::new().delete_goal(id), vec![audit])?;
        Ok(goal)
    }

    /// Move money from an account into a goal as one atomic commit
    pub fn contribute_to_goal(
        &mut self,
        goal_id: GoalId,
        amount: Money,
        source: AccountId,
        date: NaiveDate,
    ) -> LedgerResult<GoalContribution> {
        let goal = self
            .state
            .goal(goal_id)
            .ok_or_else(|| LedgerError::goal_not_found(goal_id.to_string()))?;

        let contribution =
            apply::contribute_to_goal(goal, amount, source, &self.state.accounts, date)?;

        let audits = vec![
            AuditEntry::create(
                EntityType::Transaction,
                contribution.transaction.id.to_string(),
                Some(contribution.transaction.description.clone()),
                &contribution.transaction,
            ),
            AuditEntry::update(
                EntityType::Goal,
                goal.id.to_string(),
                Some(goal.name.clone()),
                goal,
                &contribution.goal,
            ),
        ];
        self.commit(
            UnitOfWork::new()
                .put_transaction(contribution.transaction.clone())
                .put_account(contribution.account.clone())
                .put_goal(contribution.goal.clone()),
            audits,
        )?;

        Ok(contribution)
    }

    // ----- accounts -----------------------------------------------------

    /// Create an account with an opening balance
    pub fn add_account(&mut self, name: &str, opening_balance: Money) -> LedgerResult<Account> {
        let account = Account::new(name.trim(), opening_balance);
        account
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if self
            .state
            .accounts
            .iter()
            .any(|a| a.name.eq_ignore_ascii_case(&account.name))
        {
            return Err(LedgerError::Validation(format!(
                "An account named '{}' already exists",
                account.name
            )));
        }

        let audit = AuditEntry::create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        );
        self.commit(UnitOfWork::new().put_account(account.clone()), vec![audit])?;
        Ok(account)
    }

    /// Delete an account, keeping its transactions in the history
    pub fn delete_account(&mut self, id: AccountId) -> LedgerResult<Account> {
        let account = self
            .state
            .account(id)
            .cloned()
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))?;

        if self.state.accounts.len() <= 1 {
            return Err(LedgerError::Validation(
                "Cannot delete the last remaining account".into(),
            ));
        }

        let audit = AuditEntry::delete(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        );
        self.commit(UnitOfWork::new().delete_account(id), vec![audit])?;
        Ok(account)
    }

    // ----- budgets & categories -----------------------------------------

    /// Set a category's monthly limit; zero removes the budget
    pub fn set_budget(&mut self, category: &str, limit: Money) -> LedgerResult<()> {
        let mut budgets = self.state.budgets.clone();
        budgets
            .set(category, limit)
            .map_err(LedgerError::Validation)?;

        let audit = AuditEntry::update(
            EntityType::Budget,
            category.trim(),
            None,
            &self.state.budgets,
            &budgets,
        );
        self.commit(UnitOfWork::new().put_budgets(budgets), vec![audit])
    }

    pub fn add_category(&mut self, name: &str) -> LedgerResult<()> {
        let mut categories = self.state.categories.clone();
        categories.add(name).map_err(LedgerError::Validation)?;

        let audit = AuditEntry::create(EntityType::Category, name.trim(), None, &name.trim());
        self.commit(UnitOfWork::new().put_categories(categories), vec![audit])
    }

    /// Remove a category from the list; existing transactions keep it
    pub fn delete_category(&mut self, name: &str) -> LedgerResult<()> {
        let mut categories = self.state.categories.clone();
        if !categories.remove(name.trim()) {
            return Err(LedgerError::NotFound {
                entity_type: "Category",
                identifier: name.trim().to_string(),
            });
        }

        let audit = AuditEntry::delete(EntityType::Category, name.trim(), None, &name.trim());
        self.commit(UnitOfWork::new().put_categories(categories), vec![audit])
    }

    // ----- templates ----------------------------------------------------

    pub fn add_template(&mut self, template: RecurringTemplate) -> LedgerResult<RecurringTemplate> {
        template.validate().map_err(LedgerError::Validation)?;
        if self.state.account(template.account_id).is_none() {
            return Err(LedgerError::Validation(format!(
                "Unknown account: {}",
                template.account_id
            )));
        }

        let audit = AuditEntry::create(
            EntityType::Template,
            template.id.to_string(),
            Some(template.description.clone()),
            &template,
        );
        self.commit(UnitOfWork::new().put_template(template.clone()), vec![audit])?;
        Ok(template)
    }

    pub fn delete_template(&mut self, id: TemplateId) -> LedgerResult<RecurringTemplate> {
        let template = self
            .state
            .template(id)
            .cloned()
            .ok_or_else(|| LedgerError::template_not_found(id.to_string()))?;

        let audit = AuditEntry::delete(
            EntityType::Template,
            template.id.to_string(),
            Some(template.description.clone()),
            &template,
        );
        self.commit(UnitOfWork::new().delete_template(id), vec![audit])?;
        Ok(template)
    }

    /// Record a transaction from a template, dated `date`
    ///
    /// Falls back to the first account when the template's account has been
    /// deleted.
    pub fn use_template(&mut self, id: TemplateId, date: NaiveDate) -> LedgerResult<Transaction> {
        let template = self
            .state
            .template(id)
            .ok_or_else(|| LedgerError::template_not_found(id.to_string()))?;

        let account_id = match self.state.account(template.account_id) {
            Some(account) => account.id,
            None => {
                let fallback = self.state.accounts.first().ok_or_else(|| {
                    LedgerError::Validation("No account available for the template".into())
                })?;
                tracing::warn!(
                    template = %template.id,
                    fallback = %fallback.name,
                    "template account no longer exists; using first account"
                );
                fallback.id
            }
        };

        let draft = template.to_draft(date, account_id);
        self.add_transaction(draft)
    }

    // ----- internals ----------------------------------------------------

    fn commit(&mut self, work: UnitOfWork, audits: Vec<AuditEntry>) -> LedgerResult<()> {
        self.adapter
            .commit(&self.user, &work)
            .map_err(into_persistence)?;

        work.apply_to(&mut self.state);
        self.state.normalize();
        tracing::info!(
            user = %self.user,
            backend = self.adapter.name(),
            mutations = work.len(),
            "committed unit of work"
        );

        self.record(&audits);
        Ok(())
    }

    fn record(&self, audits: &[AuditEntry]) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_batch(audits) {
                tracing::warn!(error = %e, "failed to write audit log");
            }
        }
    }
}
