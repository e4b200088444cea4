//! Overall totals
//!
//! Income, expenses, and balance across the full transaction sequence.

use crate::models::{Money, Transaction};

/// Aggregate totals over all transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Money,

    /// Sum of all expense amounts
    pub expenses: Money,

    /// income - expenses
    pub balance: Money,
}

/// Compute totals over the transaction sequence
///
/// An empty sequence yields all zeros.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}
