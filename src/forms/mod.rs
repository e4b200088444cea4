//! Field-level validation for user input
//!
//! Gates the add-transaction mutation. Budget limit validation is a single
//! inline check in the budget service.

pub mod transaction;

pub use transaction::{FieldErrors, TransactionForm};
