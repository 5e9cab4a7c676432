//! Category list
//!
//! Categories are plain names. Transactions store the name itself, so
//! removing a category from the list leaves past transactions untouched.

use serde::{Deserialize, Serialize};

/// Categories every new user starts with
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Food", "Transport", "Bills", "Entertainment", "Other"];

/// Ordered list of unique category names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    list: Vec<String>,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            list: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Categories {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories = Self { list: Vec::new() };
        for name in names {
            let _ = categories.add(name);
        }
        categories
    }

    /// Append a category; rejects blanks and duplicates
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), String> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err("Category name cannot be empty".into());
        }
        if self.contains(name) {
            return Err(format!("Category already exists: {}", name));
        }
        self.list.push(name.to_string());
        Ok(())
    }

    /// Remove a category, returning whether it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.list.len();
        self.list.retain(|c| c != name);
        self.list.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.list.iter().any(|c| c == name)
    }

    pub fn names(&self) -> &[String] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
