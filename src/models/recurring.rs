//! Recurring transaction templates
//!
//! A template stores the shape of a transaction the user records often
//! (salary, rent, subscriptions). Using it produces a draft dated on the day
//! of use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, TemplateId};
use super::money::Money;
use super::transaction::{TransactionDraft, TransactionType, INCOME_CATEGORY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTemplate {
    pub id: TemplateId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub account_id: AccountId,
}

impl RecurringTemplate {
    /// Create a template; income templates always use the income category
    pub fn new(
        kind: TransactionType,
        description: impl Into<String>,
        amount: Money,
        category: Option<String>,
        account_id: AccountId,
    ) -> Self {
        let category = match kind {
            TransactionType::Income => INCOME_CATEGORY.to_string(),
            TransactionType::Expense => category.unwrap_or_default(),
        };
        Self {
            id: TemplateId::new(),
            kind,
            description: description.into(),
            amount,
            category,
            account_id,
        }
    }

    /// Turn the template into a draft for `date`, booked on `account_id`
    pub fn to_draft(&self, date: NaiveDate, account_id: AccountId) -> TransactionDraft {
        TransactionDraft::new(
            self.kind,
            self.description.clone(),
            self.amount,
            self.category.clone(),
            date,
            account_id,
        )
    }

    /// Same rules as a transaction draft
    pub fn validate(&self) -> Result<(), String> {
        self.to_draft(NaiveDate::MIN, self.account_id)
            .validate()
            .map_err(|e| e.to_string())
    }
}
