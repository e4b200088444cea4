//! Budget service
//!
//! Provides business logic for budget management: the upsert-by-category
//! mutation and the progress view pairing each budget with its
//! current-month spend.

use chrono::NaiveDate;

use crate::error::{SpendError, SpendResult};
use crate::models::{Budget, BudgetProgress, Category, Money};
use crate::reports;
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly limit for a category
    ///
    /// Rejects a non-positive limit without touching the collection.
    /// Otherwise replaces an existing budget's limit in place (preserving
    /// its position) or appends a new one, keeping exactly one budget per
    /// category, then persists the full collection.
    pub fn set_limit(&self, category: Category, limit: Money) -> SpendResult<Budget> {
        let budget = Budget::new(category, limit);

        budget
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.storage.budgets.upsert(budget)?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Get the budget for a category, if one is set
    pub fn get(&self, category: Category) -> SpendResult<Option<Budget>> {
        self.storage.budgets.get(category)
    }

    /// List all budgets in collection order
    pub fn list(&self) -> SpendResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Budget progress for the month containing `today`
    ///
    /// Result order follows the budget collection's order.
    pub fn progress(&self, today: NaiveDate) -> SpendResult<Vec<BudgetProgress>> {
        let budgets = self.storage.budgets.get_all()?;
        let transactions = self.storage.transactions.get_all()?;
        Ok(reports::budget_progress(&budgets, &transactions, today))
    }
}
