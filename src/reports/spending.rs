//! Spending aggregates
//!
//! Per-category breakdowns, the current-month spending window, and budget
//! progress. All functions here are pure: they take the collections (and
//! the reference date where relevant) as arguments and return fresh values,
//! recomputed on demand.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Budget, BudgetProgress, Category, Money, Transaction};

/// Total expense amount per category over the full sequence
///
/// Only expense transactions contribute. Categories with no matching
/// transactions are omitted. Entries are sorted by total, largest first.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<(Category, Money)> {
    let mut by_category: HashMap<Category, Money> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *by_category.entry(txn.category).or_insert(Money::zero()) += txn.amount;
    }

    let mut breakdown: Vec<(Category, Money)> = by_category.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
    breakdown
}

/// First day of the month containing `today`
fn month_start(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .expect("the first of an existing month is a valid date")
}

/// Expense totals per category for the current calendar month
///
/// Includes expense transactions dated within `[first of the month, today]`,
/// both bounds inclusive. A transaction dated before the 1st is excluded
/// even though the full-sequence breakdown counts it.
pub fn current_month_spending(
    transactions: &[Transaction],
    today: NaiveDate,
) -> HashMap<Category, Money> {
    let start = month_start(today);

    let mut by_category: HashMap<Category, Money> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= start && t.date <= today)
    {
        *by_category.entry(txn.category).or_insert(Money::zero()) += txn.amount;
    }

    by_category
}

/// Pair each budget with its current-month spend and percentage used
///
/// Result order follows the budget collection's order. A category with no
/// spending this month shows zero spent.
pub fn budget_progress(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetProgress> {
    let spending = current_month_spending(transactions, today);

    budgets
        .iter()
        .map(|b| {
            let spent = spending.get(&b.category).copied().unwrap_or_default();
            BudgetProgress::new(*b, spent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn expense(cents: i64, category: Category, date: NaiveDate) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            "test",
            category,
            date,
            TransactionKind::Expense,
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_breakdown_groups_expenses_only() {
        let mut income = expense(100000, Category::Income, date(2024, 3, 1));
        income.kind = TransactionKind::Income;

        let transactions = vec![
            expense(4250, Category::FoodAndDrink, date(2024, 3, 5)),
            expense(1000, Category::FoodAndDrink, date(2024, 3, 7)),
            expense(3000, Category::Transport, date(2024, 3, 6)),
            income,
        ];

        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 2);
        // Sorted largest first
        assert_eq!(breakdown[0], (Category::FoodAndDrink, Money::from_cents(5250)));
        assert_eq!(breakdown[1], (Category::Transport, Money::from_cents(3000)));
    }

    #[test]
    fn test_breakdown_omits_empty_categories() {
        let transactions = vec![expense(4250, Category::FoodAndDrink, date(2024, 3, 5))];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown.len(), 1);
        assert!(breakdown.iter().all(|(_, total)| !total.is_zero()));
    }

    #[test]
    fn test_breakdown_single_transaction_scenario() {
        let transactions = vec![expense(4250, Category::FoodAndDrink, date(2024, 3, 5))];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown, vec![(Category::FoodAndDrink, Money::from_cents(4250))]);
    }

    #[test]
    fn test_current_month_window() {
        let today = date(2024, 3, 15);
        let transactions = vec![
            // Last day of the previous month: excluded
            expense(9999, Category::Shopping, date(2024, 2, 29)),
            // First of the month: included (inclusive lower bound)
            expense(3000, Category::Shopping, date(2024, 3, 1)),
            // Mid-month: included
            expense(4500, Category::Shopping, date(2024, 3, 10)),
            // Today: included
            expense(500, Category::Travel, date(2024, 3, 15)),
            // Future-dated: excluded
            expense(7777, Category::Travel, date(2024, 3, 20)),
        ];

        let spending = current_month_spending(&transactions, today);
        assert_eq!(spending[&Category::Shopping].cents(), 7500);
        assert_eq!(spending[&Category::Travel].cents(), 500);
    }

    #[test]
    fn test_current_month_ignores_income() {
        let today = date(2024, 3, 15);
        let mut salary = expense(100000, Category::Income, date(2024, 3, 1));
        salary.kind = TransactionKind::Income;

        let spending = current_month_spending(&[salary], today);
        assert!(spending.is_empty());
    }

    #[test]
    fn test_budget_progress_scenario() {
        // Budget of $100 on Shopping, two expenses of $30 and $45 this month
        let today = date(2024, 3, 20);
        let budgets = vec![Budget::new(Category::Shopping, Money::from_cents(10000))];
        let transactions = vec![
            expense(3000, Category::Shopping, date(2024, 3, 5)),
            expense(4500, Category::Shopping, date(2024, 3, 12)),
        ];

        let progress = budget_progress(&budgets, &transactions, today);
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].spent.cents(), 7500);
        assert_eq!(progress[0].percentage, 75.0);
    }

    #[test]
    fn test_budget_progress_no_spending() {
        let today = date(2024, 3, 20);
        let budgets = vec![Budget::new(Category::Travel, Money::from_cents(50000))];

        let progress = budget_progress(&budgets, &[], today);
        assert_eq!(progress[0].spent, Money::zero());
        assert_eq!(progress[0].percentage, 0.0);
    }

    #[test]
    fn test_budget_progress_follows_collection_order() {
        let today = date(2024, 3, 20);
        let budgets = vec![
            Budget::new(Category::Travel, Money::from_cents(50000)),
            Budget::new(Category::Shopping, Money::from_cents(10000)),
        ];

        let progress = budget_progress(&budgets, &[], today);
        assert_eq!(progress[0].budget.category, Category::Travel);
        assert_eq!(progress[1].budget.category, Category::Shopping);
    }

    #[test]
    fn test_excluded_from_month_but_in_breakdown() {
        // A February expense counts toward the overall breakdown but not
        // toward March's budget window.
        let today = date(2024, 3, 15);
        let transactions = vec![expense(2000, Category::Shopping, date(2024, 2, 10))];

        assert_eq!(category_breakdown(&transactions).len(), 1);
        assert!(current_month_spending(&transactions, today).is_empty());
    }
}
