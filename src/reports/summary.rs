//! Dashboard summary
//!
//! Total balance across accounts plus income and expense over the whole
//! history.

use crate::config::Settings;
use crate::models::{Money, TransactionType};
use crate::storage::Snapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_balance: Money,
    pub total_income: Money,
    pub total_expense: Money,
    pub account_count: usize,
    pub transaction_count: usize,
}

impl DashboardSummary {
    pub fn generate(snapshot: &Snapshot) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        for txn in &snapshot.transactions {
            match txn.kind {
                TransactionType::Income => total_income += txn.amount,
                TransactionType::Expense => total_expense += txn.amount,
            }
        }

        Self {
            total_balance: snapshot.accounts.iter().map(|a| a.balance).sum(),
            total_income,
            total_expense,
            account_count: snapshot.accounts.len(),
            transaction_count: snapshot.transactions.len(),
        }
    }

    /// Income minus expense
    pub fn net_flow(&self) -> Money {
        self.total_income - self.total_expense
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        let rows = [
            ("Total balance", self.total_balance),
            ("Total income", self.total_income),
            ("Total expense", self.total_expense),
            ("Net flow", self.net_flow()),
        ];

        let mut output = String::from("Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        for (label, amount) in rows {
            output.push_str(&format!(
                "{:<20} {:>19}\n",
                label,
                settings.format_money(amount)
            ));
        }
        output.push_str(&format!(
            "\n{} account(s), {} transaction(s)\n",
            self.account_count, self.transaction_count
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Transaction, TransactionDraft};
    use chrono::NaiveDate;

    #[test]
    fn test_generate() {
        let a = Account::new("A", Money::new(700));
        let b = Account::new("B", Money::new(-200));
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let snapshot = Snapshot {
            transactions: vec![
                Transaction::from_draft(TransactionDraft::income(
                    "Salary",
                    Money::new(1000),
                    "Income",
                    date,
                    a.id,
                )),
                Transaction::from_draft(TransactionDraft::expense(
                    "Rent",
                    Money::new(300),
                    "Bills",
                    date,
                    a.id,
                )),
            ],
            accounts: vec![a, b],
            ..Default::default()
        };

        let summary = DashboardSummary::generate(&snapshot);
        assert_eq!(summary.total_balance.units(), 500);
        assert_eq!(summary.total_income.units(), 1000);
        assert_eq!(summary.total_expense.units(), 300);
        assert_eq!(summary.net_flow().units(), 700);

        let output = summary.format_terminal(&Settings::default());
        assert!(output.contains("Rp 1.000"));
    }
}
