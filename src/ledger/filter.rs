//! Transaction history queries

use chrono::{Duration, NaiveDate};

use crate::models::{AccountId, Transaction};

/// How far back a listing reaches, relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    /// Transactions dated on or after `reference - days`
    LastDays(u32),
}

impl DateWindow {
    /// Parse `all`, `7d`, `30d` or any `<n>d`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(Self::All);
        }
        s.strip_suffix('d')
            .and_then(|days| days.parse().ok())
            .map(Self::LastDays)
    }

    /// Earliest date inside the window, if bounded
    pub fn start(&self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::LastDays(days) => Some(reference - Duration::days(i64::from(*days))),
        }
    }
}

/// Options for filtering transactions
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    /// Case-insensitive substring of description or category
    pub search: Option<String>,
    pub window: DateWindow,
    /// Date the window is measured back from (normally today)
    pub reference: NaiveDate,
    pub account_id: Option<AccountId>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// An empty filter measured from `reference`
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            search: None,
            window: DateWindow::All,
            reference,
            account_id: None,
            limit: None,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_lowercase())
        };
        self
    }

    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(account_id) = self.account_id {
            if txn.account_id != account_id {
                return false;
            }
        }
        if let Some(start) = self.window.start(self.reference) {
            if txn.date < start {
                return false;
            }
        }
        match &self.search {
            Some(needle) => {
                txn.description.to_lowercase().contains(needle)
                    || txn.category.to_lowercase().contains(needle)
            }
            None => true,
        }
    }

    /// Matching transactions in history order, truncated to the limit
    pub fn apply<'a>(&self, history: &'a [Transaction]) -> Vec<&'a Transaction> {
        let matching = history.iter().filter(|t| self.matches(t));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn history(account: AccountId, other: AccountId) -> Vec<Transaction> {
        vec![
            Transaction::from_draft(TransactionDraft::expense(
                "Coffee beans",
                Money::new(80),
                "Food",
                day(30),
                account,
            )),
            Transaction::from_draft(TransactionDraft::expense(
                "Bus pass",
                Money::new(150),
                "Transport",
                day(20),
                other,
            )),
            Transaction::from_draft(TransactionDraft::income(
                "Salary",
                Money::new(5000),
                "Income",
                day(1),
                account,
            )),
        ]
    }

    #[test]
    fn test_window_parse() {
        assert_eq!(DateWindow::parse("all"), Some(DateWindow::All));
        assert_eq!(DateWindow::parse("7d"), Some(DateWindow::LastDays(7)));
        assert_eq!(DateWindow::parse("30D"), Some(DateWindow::LastDays(30)));
        assert_eq!(DateWindow::parse("week"), None);
    }

    #[test]
    fn test_search_is_case_insensitive_over_description_and_category() {
        let account = AccountId::new();
        let txns = history(account, AccountId::new());

        let by_desc = TransactionFilter::new(day(31)).search("COFFEE").apply(&txns);
        assert_eq!(by_desc.len(), 1);

        let by_cat = TransactionFilter::new(day(31)).search("transport").apply(&txns);
        assert_eq!(by_cat[0].description, "Bus pass");
    }

    #[test]
    fn test_window_includes_boundary() {
        let account = AccountId::new();
        let txns = history(account, AccountId::new());

        let last_week = TransactionFilter::new(day(27))
            .window(DateWindow::LastDays(7))
            .apply(&txns);
        assert_eq!(last_week.len(), 2);

        let shorter = TransactionFilter::new(day(27))
            .window(DateWindow::LastDays(6))
            .apply(&txns);
        assert_eq!(shorter.len(), 1);
        assert_eq!(shorter[0].description, "Coffee beans");
    }

    #[test]
    fn test_account_and_limit() {
        let account = AccountId::new();
        let txns = history(account, AccountId::new());

        let filtered = TransactionFilter::new(day(31)).account(account).apply(&txns);
        assert_eq!(filtered.len(), 2);

        let limited = TransactionFilter::new(day(31)).limit(1).apply(&txns);
        assert_eq!(limited.len(), 1);
    }
}
