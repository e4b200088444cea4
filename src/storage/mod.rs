//! Storage layer for spendtrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Both collections are fully loaded into memory at startup and
//! fully rewritten to disk on every mutation.

pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::SpendPaths;
use crate::error::SpendError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: SpendPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendPaths) -> Result<Self, SpendError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendPaths {
        &self.paths
    }

    /// Load both collections from disk
    pub fn load_all(&mut self) -> Result<(), SpendError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }
}
