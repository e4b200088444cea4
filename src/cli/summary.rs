//! Summary CLI command
//!
//! Shows overall totals and the expense breakdown by category.

use crate::display;
use crate::error::SpendResult;
use crate::reports;
use crate::storage::Storage;

/// Handle the summary command
pub fn handle_summary_command(storage: &Storage) -> SpendResult<()> {
    let transactions = storage.transactions.get_all()?;

    let totals = reports::totals(&transactions);
    print!("{}", display::format_totals(&totals));
    println!();

    let breakdown = reports::category_breakdown(&transactions);
    print!("{}", display::format_category_breakdown(&breakdown));

    Ok(())
}
