//! Budget model
//!
//! A budget is a monthly spending ceiling for a single category. The
//! collection holds at most one budget per category; setting a limit for a
//! category that already has one replaces it in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A per-category monthly spending ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The spending category this budget applies to
    pub category: Category,

    /// Monthly spending ceiling
    pub limit: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: Category, limit: Money) -> Self {
        Self { category, limit }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }

        if self.category.is_income() {
            return Err(BudgetValidationError::IncomeCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} per month", self.category, self.limit)
    }
}

/// A budget augmented with its computed spend for the current month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    /// The underlying budget
    pub budget: Budget,

    /// Current-month spend for the budget's category (zero if none)
    pub spent: Money,

    /// Percentage of the limit spent; 0 when the limit is not positive
    pub percentage: f64,
}

impl BudgetProgress {
    /// Pair a budget with its current-month spend
    pub fn new(budget: Budget, spent: Money) -> Self {
        let percentage = if budget.limit.is_positive() {
            spent.cents() as f64 / budget.limit.cents() as f64 * 100.0
        } else {
            0.0
        };
        Self {
            budget,
            spent,
            percentage,
        }
    }

    /// Check if spending has exceeded the limit
    pub fn is_exceeded(&self) -> bool {
        self.spent > self.budget.limit
    }

    /// Amount left before the limit is reached (never negative)
    pub fn remaining(&self) -> Money {
        if self.is_exceeded() {
            Money::zero()
        } else {
            self.budget.limit - self.spent
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
    IncomeCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be a positive amount (got {})", limit)
            }
            Self::IncomeCategory => write!(f, "Budgets apply to spending categories only"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
