//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let signed_amount = if txn.is_income() {
        format!("+{}", txn.amount)
    } else {
        format!("-{}", txn.amount)
    };

    format!(
        "{} {} {:24} {:14} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        txn.category.label(),
        signed_amount
    )
}

/// Format a list of transactions as a register, newest first
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:14} {:>12}\n",
        "Id", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
