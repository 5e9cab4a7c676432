//! Reports module for walletbook
//!
//! Read-only views over a user's snapshot: dashboard totals, budget
//! overview and monthly analytics.

pub mod budget_overview;
pub mod monthly;
pub mod summary;

pub use budget_overview::{BudgetOverviewReport, BudgetRow};
pub use monthly::{CategoryTrendReport, MonthRow, MonthlyReport, YearMonth};
pub use summary::DashboardSummary;
