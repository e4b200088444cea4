//! Budget display formatting
//!
//! Formats budget progress with a text progress bar. The bar caps at 100%
//! even when spending has exceeded the limit; the status column carries the
//! overage.

use crate::models::BudgetProgress;

const BAR_WIDTH: usize = 20;

/// Format a single budget's progress row
pub fn format_budget_row(progress: &BudgetProgress) -> String {
    let filled = ((progress.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar: String = "#".repeat(filled) + &".".repeat(BAR_WIDTH - filled);

    let status = if progress.is_exceeded() {
        "Exceeded".to_string()
    } else {
        format!("{:.0}% used", progress.percentage)
    };

    format!(
        "{:14} [{}] {:>10} of {:>10}  {}",
        progress.budget.category.label(),
        bar,
        progress.spent,
        progress.budget.limit,
        status
    )
}

/// Format the full budget progress list
pub fn format_budget_progress(progress: &[BudgetProgress]) -> String {
    if progress.is_empty() {
        return "No budgets set. Use 'budget set <category> <limit>' to create one.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Budget Progress (This Month)\n");
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for entry in progress {
        output.push_str(&format_budget_row(entry));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, Money};

    #[test]
    fn test_row_shows_percentage() {
        let budget = Budget::new(Category::Shopping, Money::from_cents(10000));
        let progress = BudgetProgress::new(budget, Money::from_cents(7500));

        let row = format_budget_row(&progress);
        assert!(row.contains("Shopping"));
        assert!(row.contains("$75.00"));
        assert!(row.contains("$100.00"));
        assert!(row.contains("75% used"));
    }

    #[test]
    fn test_exceeded_budget_is_flagged_and_bar_capped() {
        let budget = Budget::new(Category::Travel, Money::from_cents(10000));
        let progress = BudgetProgress::new(budget, Money::from_cents(25000));

        let row = format_budget_row(&progress);
        assert!(row.contains("Exceeded"));
        // Bar never overflows its width
        assert!(row.contains(&"#".repeat(BAR_WIDTH)));
        assert!(!row.contains(&"#".repeat(BAR_WIDTH + 1)));
    }

    #[test]
    fn test_empty_progress_hint() {
        let output = format_budget_progress(&[]);
        assert!(output.contains("No budgets set"));
    }
}
