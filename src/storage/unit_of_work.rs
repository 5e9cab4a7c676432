//! Unit of work: a group of mutations applied together or not at all
//!
//! The ledger builds one of these per user action (a transaction plus the
//! account balances it moves, or a contribution plus its goal) and hands it
//! to the adapter in a single `commit` call.

use serde::{Deserialize, Serialize};

use super::snapshot::{upsert_by, Snapshot};
use crate::models::{
    sort_history, Account, AccountId, Budgets, Categories, Goal, GoalId, RecurringTemplate,
    TemplateId, Transaction, TransactionId,
};

/// A single stored-state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Mutation {
    PutAccount(Account),
    DeleteAccount(AccountId),
    PutTransaction(Transaction),
    DeleteTransaction(TransactionId),
    PutGoal(Goal),
    DeleteGoal(GoalId),
    PutBudgets(Budgets),
    PutCategories(Categories),
    PutTemplate(RecurringTemplate),
    DeleteTemplate(TemplateId),
}

impl Mutation {
    /// Apply this mutation to an in-memory snapshot
    pub fn apply_to(&self, snapshot: &mut Snapshot) {
        match self {
            Mutation::PutAccount(account) => {
                upsert_by(&mut snapshot.accounts, account.clone(), |a| a.id)
            }
            Mutation::DeleteAccount(id) => snapshot.accounts.retain(|a| a.id != *id),
            Mutation::PutTransaction(txn) => {
                upsert_by(&mut snapshot.transactions, txn.clone(), |t| t.id)
            }
            Mutation::DeleteTransaction(id) => snapshot.transactions.retain(|t| t.id != *id),
            Mutation::PutGoal(goal) => upsert_by(&mut snapshot.goals, goal.clone(), |g| g.id),
            Mutation::DeleteGoal(id) => snapshot.goals.retain(|g| g.id != *id),
            Mutation::PutBudgets(budgets) => snapshot.budgets = budgets.clone(),
            Mutation::PutCategories(categories) => snapshot.categories = categories.clone(),
            Mutation::PutTemplate(template) => {
                upsert_by(&mut snapshot.recurring_templates, template.clone(), |t| t.id)
            }
            Mutation::DeleteTemplate(id) => snapshot.recurring_templates.retain(|t| t.id != *id),
        }
    }
}

/// Ordered list of mutations submitted as one commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfWork {
    mutations: Vec<Mutation>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mutation: Mutation) {
        self.mutations.push(mutation);
    }

    pub fn put_account(mut self, account: Account) -> Self {
        self.push(Mutation::PutAccount(account));
        self
    }

    pub fn delete_account(mut self, id: AccountId) -> Self {
        self.push(Mutation::DeleteAccount(id));
        self
    }

    pub fn put_transaction(mut self, txn: Transaction) -> Self {
        self.push(Mutation::PutTransaction(txn));
        self
    }

    pub fn delete_transaction(mut self, id: TransactionId) -> Self {
        self.push(Mutation::DeleteTransaction(id));
        self
    }

    pub fn put_goal(mut self, goal: Goal) -> Self {
        self.push(Mutation::PutGoal(goal));
        self
    }

    pub fn delete_goal(mut self, id: GoalId) -> Self {
        self.push(Mutation::DeleteGoal(id));
        self
    }

    pub fn put_budgets(mut self, budgets: Budgets) -> Self {
        self.push(Mutation::PutBudgets(budgets));
        self
    }

    pub fn put_categories(mut self, categories: Categories) -> Self {
        self.push(Mutation::PutCategories(categories));
        self
    }

    pub fn put_template(mut self, template: RecurringTemplate) -> Self {
        self.push(Mutation::PutTemplate(template));
        self
    }

    pub fn delete_template(mut self, id: TemplateId) -> Self {
        self.push(Mutation::DeleteTemplate(id));
        self
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Apply every mutation in order, then restore history ordering
    pub fn apply_to(&self, snapshot: &mut Snapshot) {
        for mutation in &self.mutations {
            mutation.apply_to(snapshot);
        }
        sort_history(&mut snapshot.transactions);
    }
}
