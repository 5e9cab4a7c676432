//! Category display formatting

use crate::config::Settings;
use crate::models::{Budgets, Categories};

/// List categories, showing the budget limit where one is set
pub fn format_category_list(
    categories: &Categories,
    budgets: &Budgets,
    settings: &Settings,
) -> String {
    if categories.is_empty() {
        return "No categories defined.".to_string();
    }

    let mut output = String::new();
    for name in categories.names() {
        match budgets.get(name) {
            Some(limit) => output.push_str(&format!(
                "  {:<24} budget {}\n",
                name,
                settings.format_money(limit)
            )),
            None => output.push_str(&format!("  {}\n", name)),
        }
    }
    output
}
