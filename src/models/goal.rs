//! Savings goal model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Category given to the expense recorded by a goal contribution
pub const SAVINGS_GOAL_CATEGORY: &str = "Savings Goal";

/// Derived progress state of a goal; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Active,
    Achieved,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Achieved => write!(f, "Achieved"),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    /// Sum of all contributions so far; may exceed the target
    pub current_amount: Money,
}

impl Goal {
    /// Create a goal with no progress
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
        }
    }

    pub fn status(&self) -> GoalStatus {
        if self.current_amount >= self.target_amount {
            GoalStatus::Achieved
        } else {
            GoalStatus::Active
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.status() == GoalStatus::Achieved
    }

    /// Amount still missing, zero once achieved
    pub fn remaining(&self) -> Money {
        if self.is_achieved() {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Progress in whole percent, capped at 100 for display
    pub fn progress_percent(&self) -> u8 {
        if !self.target_amount.is_positive() {
            return 100;
        }
        let pct = self.current_amount.units().max(0) as i128 * 100
            / self.target_amount.units() as i128;
        pct.min(100) as u8
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Goal name cannot be empty".into());
        }
        if !self.target_amount.is_positive() {
            return Err(format!(
                "Goal target must be greater than zero (got {})",
                self.target_amount
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_starts_empty() {
        let goal = Goal::new("New Laptop", Money::new(10_000_000));
        assert!(goal.current_amount.is_zero());
        assert_eq!(goal.status(), GoalStatus::Active);
        assert_eq!(goal.remaining().units(), 10_000_000);
    }

    #[test]
    fn test_progress_and_status() {
        let mut goal = Goal::new("Trip", Money::new(200));
        goal.current_amount = Money::new(50);
        assert_eq!(goal.progress_percent(), 25);

        goal.current_amount = Money::new(200);
        assert!(goal.is_achieved());
        assert_eq!(goal.progress_percent(), 100);

        goal.current_amount = Money::new(500);
        assert_eq!(goal.progress_percent(), 100);
        assert!(goal.remaining().is_zero());
    }

    #[test]
    fn test_validate() {
        assert!(Goal::new("Trip", Money::new(1)).validate().is_ok());
        assert!(Goal::new("", Money::new(1)).validate().is_err());
        assert!(Goal::new("Trip", Money::zero()).validate().is_err());
    }
}
