//! Budget Overview Report
//!
//! Compares each budgeted category's limit with the total expense recorded
//! in that category.

use std::collections::HashMap;

use crate::config::Settings;
use crate::models::Money;
use crate::storage::Snapshot;

/// A row in the budget report for a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetRow {
    pub category: String,
    pub limit: Money,
    /// Sum of expense amounts in the category
    pub spent: Money,
}

impl BudgetRow {
    /// Limit minus spent; negative once over budget
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// Share of the limit used, in whole percent (display only)
    pub fn percent_used(&self) -> u32 {
        if !self.limit.is_positive() {
            return 0;
        }
        let pct = self.spent.units().max(0) as i128 * 100 / self.limit.units() as i128;
        u32::try_from(pct).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// One row per budgeted category, sorted by category name
    pub rows: Vec<BudgetRow>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetOverviewReport {
    pub fn generate(snapshot: &Snapshot) -> Self {
        let mut spent_by_category: HashMap<&str, Money> = HashMap::new();
        for txn in snapshot.transactions.iter().filter(|t| t.is_expense()) {
            *spent_by_category
                .entry(txn.category.as_str())
                .or_insert_with(Money::zero) += txn.amount;
        }

        let rows: Vec<BudgetRow> = snapshot
            .budgets
            .iter()
            .map(|(category, limit)| BudgetRow {
                category: category.clone(),
                limit: *limit,
                spent: spent_by_category
                    .get(category.as_str())
                    .copied()
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            total_limit: rows.iter().map(|r| r.limit).sum(),
            total_spent: rows.iter().map(|r| r.spent).sum(),
            rows,
        }
    }

    pub fn over_budget(&self) -> Vec<&BudgetRow> {
        self.rows.iter().filter(|r| r.is_over_budget()).collect()
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No budgets set.".to_string();
        }

        let money = |m: Money| settings.format_money(m);
        let mut output = String::from("Budget Overview\n");
        output.push_str(&"=".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16} {:>16} {:>16} {:>6}\n",
            "Category", "Limit", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(78));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_over_budget() { " *" } else { "" };
            output.push_str(&format!(
                "{:<20} {:>16} {:>16} {:>16} {:>5}%{}\n",
                row.category,
                money(row.limit),
                money(row.spent),
                money(row.remaining()),
                row.percent_used(),
                marker
            ));
        }

        output.push_str(&"-".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16} {:>16} {:>16}\n",
            "TOTAL",
            money(self.total_limit),
            money(self.total_spent),
            money(self.total_limit - self.total_spent)
        ));

        if !self.over_budget().is_empty() {
            output.push_str("\n* = Over budget\n");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Budgets, Transaction, TransactionDraft};
    use chrono::NaiveDate;

    fn snapshot() -> Snapshot {
        let account = AccountId::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut budgets = Budgets::new();
        budgets.set("Food", Money::new(500)).unwrap();
        budgets.set("Transport", Money::new(200)).unwrap();

        Snapshot {
            transactions: vec![
                Transaction::from_draft(TransactionDraft::expense(
                    "Dinner",
                    Money::new(350),
                    "Food",
                    date,
                    account,
                )),
                Transaction::from_draft(TransactionDraft::expense(
                    "Groceries",
                    Money::new(250),
                    "Food",
                    date,
                    account,
                )),
                // Income in a budgeted category does not count as spending
                Transaction::from_draft(TransactionDraft::income(
                    "Refund",
                    Money::new(90),
                    "Transport",
                    date,
                    account,
                )),
            ],
            budgets,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_report() {
        let report = BudgetOverviewReport::generate(&snapshot());
        assert_eq!(report.rows.len(), 2);

        let food = &report.rows[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.spent.units(), 600);
        assert_eq!(food.remaining().units(), -100);
        assert_eq!(food.percent_used(), 120);
        assert!(food.is_over_budget());

        let transport = &report.rows[1];
        assert!(transport.spent.is_zero());
        assert!(!transport.is_over_budget());

        assert_eq!(report.total_limit.units(), 700);
        assert_eq!(report.over_budget().len(), 1);
    }

    #[test]
    fn test_percent_used_saturates() {
        let row = BudgetRow {
            category: "Food".into(),
            limit: Money::new(1),
            spent: Money::new(i64::MAX),
        };
        assert_eq!(row.percent_used(), u32::MAX);

        let zero_limit = BudgetRow {
            limit: Money::zero(),
            ..row
        };
        assert_eq!(zero_limit.percent_used(), 0);
    }

    #[test]
    fn test_terminal_format() {
        let output = BudgetOverviewReport::generate(&snapshot()).format_terminal(&Settings::default());
        assert!(output.contains("Budget Overview"));
        assert!(output.contains("Food"));
        assert!(output.contains("* = Over budget"));
    }

    #[test]
    fn test_empty_budgets() {
        let report = BudgetOverviewReport::generate(&Snapshot::default());
        assert_eq!(report.format_terminal(&Settings::default()), "No budgets set.");
    }
}
