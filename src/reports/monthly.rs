//! Month-by-month analytics
//!
//! - [`MonthlyReport`]: income and expense totals per calendar month
//! - [`CategoryTrendReport`]: the top expense categories and how much went
//!   to each of them month by month

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::config::Settings;
use crate::models::{Money, Transaction, TransactionType};

/// Number of categories tracked by the trend report
pub const TREND_CATEGORY_COUNT: usize = 5;

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    pub month: YearMonth,
    pub income: Money,
    pub expense: Money,
}

impl MonthRow {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Oldest month first; months without transactions are omitted
    pub months: Vec<MonthRow>,
}

impl MonthlyReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_month: BTreeMap<YearMonth, (Money, Money)> = BTreeMap::new();
        for txn in transactions {
            let totals = by_month
                .entry(YearMonth::of(txn.date))
                .or_insert((Money::zero(), Money::zero()));
            match txn.kind {
                TransactionType::Income => totals.0 += txn.amount,
                TransactionType::Expense => totals.1 += txn.amount,
            }
        }

        let months = by_month
            .into_iter()
            .map(|(month, (income, expense))| MonthRow {
                month,
                income,
                expense,
            })
            .collect();
        Self { months }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.months.is_empty() {
            return "No transactions yet.".to_string();
        }

        let mut output = format!(
            "{:<8} {:>18} {:>18} {:>18}\n",
            "Month", "Income", "Expense", "Net"
        );
        output.push_str(&"-".repeat(65));
        output.push('\n');
        for row in &self.months {
            output.push_str(&format!(
                "{:<8} {:>18} {:>18} {:>18}\n",
                row.month.to_string(),
                settings.format_money(row.income),
                settings.format_money(row.expense),
                settings.format_money(row.net())
            ));
        }
        output
    }
}

#[derive(Debug, Clone)]
pub struct CategoryTrendReport {
    /// Top expense categories, largest total first (ties by name)
    pub categories: Vec<String>,
    /// Per month, one amount per entry of `categories` (zero-filled);
    /// only months with spending in at least one of them
    pub months: Vec<(YearMonth, Vec<Money>)>,
}

impl CategoryTrendReport {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();

        let mut totals: HashMap<&str, Money> = HashMap::new();
        for txn in &expenses {
            *totals
                .entry(txn.category.as_str())
                .or_insert_with(Money::zero) += txn.amount;
        }

        let mut ranked: Vec<(&str, Money)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let categories: Vec<String> = ranked
            .into_iter()
            .take(TREND_CATEGORY_COUNT)
            .map(|(name, _)| name.to_string())
            .collect();

        let mut by_month: BTreeMap<YearMonth, Vec<Money>> = BTreeMap::new();
        for txn in &expenses {
            let Some(slot) = categories.iter().position(|c| *c == txn.category) else {
                continue;
            };
            let amounts = by_month
                .entry(YearMonth::of(txn.date))
                .or_insert_with(|| vec![Money::zero(); categories.len()]);
            amounts[slot] += txn.amount;
        }

        Self {
            categories,
            months: by_month.into_iter().collect(),
        }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.categories.is_empty() {
            return "No expenses yet.".to_string();
        }

        let mut output = format!("{:<8}", "Month");
        for category in &self.categories {
            output.push_str(&format!(" {:>16}", category));
        }
        output.push('\n');
        output.push_str(&"-".repeat(8 + 17 * self.categories.len()));
        output.push('\n');

        for (month, amounts) in &self.months {
            output.push_str(&format!("{:<8}", month.to_string()));
            for amount in amounts {
                output.push_str(&format!(" {:>16}", settings.format_money(*amount)));
            }
            output.push('\n');
        }
        output
    }
}
