//! Pure balance-keeping operations
//!
//! None of these functions touch storage or mutate their inputs. Each returns
//! the new records (transaction, accounts, goal) that the caller commits as
//! one unit of work.
//!
//! The invariant they preserve: an account's balance equals its opening
//! balance plus the signed amounts of every transaction referencing it.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, Goal, Money, Transaction, TransactionDraft, SAVINGS_GOAL_CATEGORY,
};

/// Records produced by a goal contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalContribution {
    pub goal: Goal,
    pub transaction: Transaction,
    pub account: Account,
}

fn find_account(accounts: &[Account], id: AccountId) -> Option<&Account> {
    accounts.iter().find(|a| a.id == id)
}

/// Balance arithmetic that rejects overflow instead of wrapping
fn checked(result: Option<Money>) -> LedgerResult<Money> {
    result.ok_or_else(|| LedgerError::Validation("Amount out of range".into()))
}

fn validate_draft<'a>(draft: &TransactionDraft, accounts: &'a [Account]) -> LedgerResult<&'a Account> {
    draft
        .validate()
        .map_err(|e| LedgerError::Validation(e.to_string()))?;

    find_account(accounts, draft.account_id)
        .ok_or_else(|| LedgerError::Validation(format!("Unknown account: {}", draft.account_id)))
}

/// Finalize a draft and move its account's balance
pub fn apply_create(
    draft: TransactionDraft,
    accounts: &[Account],
) -> LedgerResult<(Transaction, Account)> {
    apply_create_at(draft, accounts, Utc::now())
}

/// [`apply_create`] with an explicit creation time
pub fn apply_create_at(
    draft: TransactionDraft,
    accounts: &[Account],
    created_at: DateTime<Utc>,
) -> LedgerResult<(Transaction, Account)> {
    let account = validate_draft(&draft, accounts)?;
    let updated =
        account.with_balance(checked(account.balance.checked_add(draft.signed_amount()))?);
    let txn = Transaction::from_draft_at(draft, created_at);
    Ok((txn, updated))
}

/// Replace every editable field of `old` and rebalance the affected accounts
///
/// Returns the merged transaction (same id and creation time) and the
/// accounts whose balances changed. When the old account no longer exists
/// only the new account is adjusted.
pub fn apply_update(
    old: &Transaction,
    replacement: TransactionDraft,
    accounts: &[Account],
) -> LedgerResult<(Transaction, Vec<Account>)> {
    let new_account = validate_draft(&replacement, accounts)?;
    let old_signed = old.signed_amount();
    let new_signed = replacement.signed_amount();

    let changed = if old.account_id == replacement.account_id {
        let delta = checked(new_signed.checked_sub(old_signed))?;
        vec![new_account.with_balance(checked(new_account.balance.checked_add(delta))?)]
    } else {
        let mut changed = Vec::with_capacity(2);
        match find_account(accounts, old.account_id) {
            Some(old_account) => changed.push(
                old_account.with_balance(checked(old_account.balance.checked_sub(old_signed))?),
            ),
            None => tracing::warn!(
                transaction = %old.id,
                account = %old.account_id,
                "original account no longer exists; nothing to revert"
            ),
        }
        changed.push(new_account.with_balance(checked(
            new_account.balance.checked_add(new_signed),
        )?));
        changed
    };

    Ok((old.merged_with(replacement), changed))
}

/// Reverse a transaction's effect on its account
///
/// Returns `None` when the account has been deleted since.
pub fn apply_delete(txn: &Transaction, accounts: &[Account]) -> LedgerResult<Option<Account>> {
    match find_account(accounts, txn.account_id) {
        Some(account) => {
            let balance = checked(account.balance.checked_sub(txn.signed_amount()))?;
            Ok(Some(account.with_balance(balance)))
        }
        None => {
            tracing::warn!(
                transaction = %txn.id,
                account = %txn.account_id,
                "deleting transaction of a removed account"
            );
            Ok(None)
        }
    }
}

/// Move money from an account into a savings goal
///
/// Records an expense in the savings category and raises the goal's
/// progress by the same amount. Progress may exceed the target.
pub fn contribute_to_goal(
    goal: &Goal,
    amount: Money,
    source: AccountId,
    accounts: &[Account],
    date: NaiveDate,
) -> LedgerResult<GoalContribution> {
    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Contribution must be greater than zero (got {})",
            amount
        )));
    }

    let draft = TransactionDraft::expense(
        format!("Saving for: {}", goal.name),
        amount,
        SAVINGS_GOAL_CATEGORY,
        date,
        source,
    );
    let (transaction, account) = apply_create(draft, accounts)?;

    let mut goal = goal.clone();
    goal.current_amount = checked(goal.current_amount.checked_add(amount))?;

    Ok(GoalContribution {
        goal,
        transaction,
        account,
    })
}
