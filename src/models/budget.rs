//! Category budgets
//!
//! A budget is a spending limit per category name. Budgets never touch
//! account balances; they are compared against expense totals when reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;

/// Mapping of category name to spending limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budgets(BTreeMap<String, Money>);

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a category; a zero limit clears it
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Result<(), String> {
        let category = category.into();
        let category = category.trim();
        if category.is_empty() {
            return Err("Budget category cannot be empty".into());
        }
        if limit.is_negative() {
            return Err(format!("Budget limit cannot be negative (got {})", limit));
        }
        if limit.is_zero() {
            self.0.remove(category);
        } else {
            self.0.insert(category.to_string(), limit);
        }
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    pub fn remove(&mut self, category: &str) -> Option<Money> {
        self.0.remove(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Money)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
