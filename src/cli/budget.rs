//! Budget CLI commands
//!
//! Implements CLI commands for setting per-category monthly limits and
//! viewing progress against them.

use chrono::Local;
use clap::Subcommand;

use crate::display;
use crate::error::{SpendError, SpendResult};
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_category;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category (replaces any existing limit)
    Set {
        /// Spending category
        category: String,
        /// Monthly limit (e.g., "100" or "100.00")
        limit: String,
    },

    /// Show all budgets with this month's progress
    List,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> SpendResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let category = parse_category(&category)?;
            let limit = Money::parse(&limit)
                .map_err(|e| SpendError::Validation(e.to_string()))?;

            let budget = service.set_limit(category, limit)?;
            println!("Budget set: {}", budget);
        }
        BudgetCommands::List => {
            let today = Local::now().date_naive();
            let progress = service.progress(today)?;
            print!("{}", display::format_budget_progress(&progress));
        }
    }

    Ok(())
}
