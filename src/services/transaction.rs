//! Transaction service
//!
//! Provides business logic for the transaction sequence: validated creation
//! with explicit defaults, deletion by id, and filtered listing. Every
//! successful mutation rewrites the full collection to disk in the same
//! step, so callers never observe a mutated-but-unpersisted state.

use chrono::{Local, NaiveDate};

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
///
/// Optional fields have explicit defaults applied at creation time:
/// category falls back to `Other` (configurable via settings at the CLI
/// boundary), date to today, and kind to expense.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
}

/// Options for filtering transaction listings
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction at the front of the sequence
    ///
    /// Rejects invalid input without touching the collection. On success the
    /// new transaction is at position 0 and the full sequence has been
    /// persisted.
    pub fn add(&self, input: NewTransaction) -> SpendResult<Transaction> {
        let txn = Transaction::new(
            input.amount,
            input.description.trim(),
            input.category.unwrap_or_default(),
            input.date.unwrap_or_else(|| Local::now().date_naive()),
            input.kind.unwrap_or_default(),
        );

        txn.validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.storage.transactions.insert_front(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> SpendResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full UUID or by the short id shown in listings
    pub fn find(&self, identifier: &str) -> SpendResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let needle = identifier.strip_prefix("txn-").unwrap_or(identifier);
        let all = self.storage.transactions.get_all()?;
        Ok(all
            .into_iter()
            .find(|t| t.id.as_uuid().to_string().starts_with(needle)))
    }

    /// List transactions, newest first, with optional filtering
    pub fn list(&self, filter: TransactionFilter) -> SpendResult<Vec<Transaction>> {
        let mut transactions = if let Some(category) = filter.category {
            self.storage.transactions.get_by_category(category)?
        } else {
            self.storage.transactions.get_all()?
        };

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Delete a transaction by id
    ///
    /// Returns `Ok(true)` if a transaction was removed and `Ok(false)` if
    /// the id was absent; the absent case leaves the sequence (and the
    /// stored file) untouched. The operation is unconditional once called;
    /// user confirmation lives at the CLI boundary.
    pub fn delete(&self, id: TransactionId) -> SpendResult<bool> {
        let removed = self.storage.transactions.delete(id)?;

        if removed {
            self.storage.transactions.save()?;
        }

        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> SpendResult<usize> {
        self.storage.transactions.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn coffee_input() -> NewTransaction {
        NewTransaction {
            amount: Money::from_cents(4250),
            description: "Coffee".to_string(),
            category: Some(Category::FoodAndDrink),
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            kind: Some(TransactionKind::Expense),
        }
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.add(coffee_input()).unwrap();

        assert_eq!(txn.amount.cents(), 4250);
        assert_eq!(txn.category, Category::FoodAndDrink);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_add_applies_defaults() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add(NewTransaction {
                amount: Money::from_cents(1000),
                description: "Mystery".to_string(),
                category: None,
                date: None,
                kind: None,
            })
            .unwrap();

        assert_eq!(txn.category, Category::Other);
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.date, Local::now().date_naive());
    }

    #[test]
    fn test_add_inserts_at_front_without_touching_rest() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let first = service.add(coffee_input()).unwrap();
        let mut second_input = coffee_input();
        second_input.description = "Groceries".to_string();
        let second = service.add(second_input).unwrap();

        let all = service.list(TransactionFilter::new()).unwrap();
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1], first);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input = coffee_input();
        input.amount = Money::zero();
        let result = service.add(input);
        assert!(matches!(result, Err(SpendError::Validation(_))));

        let mut input = coffee_input();
        input.description = "   ".to_string();
        assert!(service.add(input).is_err());

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let a = service.add(coffee_input()).unwrap();
        let b = service.add(coffee_input()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.add(coffee_input()).unwrap();
        let short = txn.id.to_string(); // "txn-" + first 8 chars

        let found = service.find(&short).unwrap().unwrap();
        assert_eq!(found.id, txn.id);

        let full = txn.id.as_uuid().to_string();
        assert_eq!(service.find(&full).unwrap().unwrap().id, txn.id);

        assert!(service.find("txn-00000000").unwrap().is_none());
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.add(coffee_input()).unwrap();
        assert!(service.delete(txn.id).unwrap());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.add(coffee_input()).unwrap();
        let before = service.list(TransactionFilter::new()).unwrap();

        assert!(!service.delete(TransactionId::new()).unwrap());
        assert_eq!(service.list(TransactionFilter::new()).unwrap(), before);
    }

    #[test]
    fn test_mutations_persist() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();

        let id = {
            let service = TransactionService::new(&storage);
            service.add(coffee_input()).unwrap().id
        };

        // Reload from disk into a fresh storage
        let mut storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        let service2 = TransactionService::new(&storage2);

        assert_eq!(service2.count().unwrap(), 1);
        assert!(service2.get(id).unwrap().is_some());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.add(coffee_input()).unwrap();
        service
            .add(NewTransaction {
                amount: Money::from_cents(200000),
                description: "Salary".to_string(),
                category: Some(Category::Income),
                date: NaiveDate::from_ymd_opt(2024, 3, 1),
                kind: Some(TransactionKind::Income),
            })
            .unwrap();

        let income = service
            .list(TransactionFilter::new().kind(TransactionKind::Income))
            .unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].description, "Salary");

        let food = service
            .list(TransactionFilter::new().category(Category::FoodAndDrink))
            .unwrap();
        assert_eq!(food.len(), 1);

        let limited = service.list(TransactionFilter::new().limit(1)).unwrap();
        assert_eq!(limited.len(), 1);
    }
}
