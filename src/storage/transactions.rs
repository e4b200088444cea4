//! Transaction repository for JSON storage
//!
//! Manages loading and saving the transaction sequence to expenses.json.
//! The sequence is ordered newest-first by insertion; the file stores the
//! collection verbatim in that order, so load and save round-trip it
//! without re-sorting.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{Category, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the ordered transaction sequence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    ///
    /// A missing file yields an empty collection; a malformed file is a
    /// hard error.
    pub fn load(&self) -> Result<(), SpendError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = transactions;
        Ok(())
    }

    /// Save the full transaction sequence to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get all transactions for a category, newest first
    pub fn get_by_category(&self, category: Category) -> Result<Vec<Transaction>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect())
    }

    /// Insert a transaction at the front of the sequence (newest first)
    pub fn insert_front(&self, txn: Transaction) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, txn);
        Ok(())
    }

    /// Delete a transaction by id
    ///
    /// Returns `false` without touching the sequence when the id is absent.
    pub fn delete(&self, id: TransactionId) -> Result<bool, SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() != before)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
