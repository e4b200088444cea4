//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod scan;
pub mod summary;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use scan::{handle_scan_command, ScanArgs};
pub use summary::handle_summary_command;
pub use transaction::{handle_add, handle_delete, handle_list, AddArgs, DeleteArgs, ListArgs};

use crate::error::{SpendError, SpendResult};
use crate::models::Category;

/// Parse a category argument against the fixed vocabulary
pub(crate) fn parse_category(s: &str) -> SpendResult<Category> {
    s.parse().map_err(|_| {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        SpendError::Validation(format!(
            "Unknown category '{}'. Valid categories: {}",
            s,
            labels.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Travel").unwrap(), Category::Travel);
        assert_eq!(parse_category("food & drink").unwrap(), Category::FoodAndDrink);

        let err = parse_category("Groceries").unwrap_err();
        assert!(err.to_string().contains("Valid categories"));
    }
}
