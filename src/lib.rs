//! spendtrack - Command-line personal finance tracker
//!
//! This library provides the core functionality for the spendtrack
//! application: recording income and expense transactions, computing
//! aggregate statistics, tracking per-category monthly budgets, and
//! pre-filling new transactions from receipt photos via the Gemini API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (validated mutations)
//! - `reports`: Pure aggregate computations over the collections
//! - `forms`: Field-level validation for transaction entry
//! - `scan`: Receipt extraction via the Gemini API
//! - `cli`: Command handlers
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use spendtrack::config::{paths::SpendPaths, settings::Settings};
//! use spendtrack::storage::Storage;
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod models;
pub mod reports;
pub mod scan;
pub mod services;
pub mod storage;

pub use error::SpendError;
