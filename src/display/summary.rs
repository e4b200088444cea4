//! Summary display formatting
//!
//! Formats the overall totals and the per-category expense breakdown.

use crate::models::{Category, Money};
use crate::reports::Totals;

/// Format the overall totals block
pub fn format_totals(totals: &Totals) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:16} {:>12}\n", "Total Balance", totals.balance));
    output.push_str(&format!("{:16} {:>12}\n", "Total Income", totals.income));
    output.push_str(&format!("{:16} {:>12}\n", "Total Expenses", totals.expenses));
    output
}

/// Format the expense breakdown by category
///
/// Each row shows the category's share of total expenses.
pub fn format_category_breakdown(breakdown: &[(Category, Money)]) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let total: Money = breakdown.iter().map(|(_, amount)| *amount).sum();

    let mut output = String::new();
    output.push_str("Expenses by Category\n");
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for (category, amount) in breakdown {
        let share = if total.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / total.cents() as f64 * 100.0
        };
        output.push_str(&format!(
            "{:16} {:>12} {:>6.1}%\n",
            category.label(),
            amount,
            share
        ));
    }

    output
}
