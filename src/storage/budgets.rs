//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json. The collection is
//! unique by category; upserting an existing category replaces its limit in
//! place, preserving the entry's position.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{Budget, Category};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let budgets: Vec<Budget> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = budgets;
        Ok(())
    }

    /// Save the full budget collection to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the budget for a category, if one is set
    pub fn get(&self, category: Category) -> Result<Option<Budget>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|b| b.category == category).copied())
    }

    /// Get all budgets in collection order
    pub fn get_all(&self) -> Result<Vec<Budget>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Insert or replace the budget for a category
    ///
    /// An existing entry keeps its position in the collection; a new
    /// category is appended. At most one budget per category is maintained.
    pub fn upsert(&self, budget: Budget) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = data.iter_mut().find(|b| b.category == budget.category) {
            *existing = budget;
        } else {
            data.push(budget);
        }

        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_appends_new_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(Category::Shopping, Money::from_cents(10000)))
            .unwrap();
        repo.upsert(Budget::new(Category::Travel, Money::from_cents(50000)))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, Category::Shopping);
        assert_eq!(all[1].category, Category::Travel);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(Category::Shopping, Money::from_cents(10000)))
            .unwrap();
        repo.upsert(Budget::new(Category::Travel, Money::from_cents(50000)))
            .unwrap();
        repo.upsert(Budget::new(Category::Shopping, Money::from_cents(20000)))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        // Position preserved, only the limit changed
        assert_eq!(all[0].category, Category::Shopping);
        assert_eq!(all[0].limit.cents(), 20000);
        assert_eq!(all[1].category, Category::Travel);
        assert_eq!(all[1].limit.cents(), 50000);
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(Category::Health, Money::from_cents(7500)))
            .unwrap();

        let found = repo.get(Category::Health).unwrap().unwrap();
        assert_eq!(found.limit.cents(), 7500);
        assert!(repo.get(Category::Travel).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Budget::new(Category::Shopping, Money::from_cents(10000)))
            .unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let budget = repo2.get(Category::Shopping).unwrap().unwrap();
        assert_eq!(budget.limit.cents(), 10000);
    }
}
