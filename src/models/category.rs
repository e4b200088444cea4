//! Category vocabulary
//!
//! Transactions and budgets are classified with a fixed, closed set of
//! categories. There are no dynamic or user-defined categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transaction category from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Shopping,
    Housing,
    Transport,
    Travel,
    Entertainment,
    Health,
    Income,
    Utilities,
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::FoodAndDrink,
        Category::Shopping,
        Category::Housing,
        Category::Transport,
        Category::Travel,
        Category::Entertainment,
        Category::Health,
        Category::Income,
        Category::Utilities,
        Category::Other,
    ];

    /// The canonical label for this category
    pub const fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDrink => "Food & Drink",
            Category::Shopping => "Shopping",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Income => "Income",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    /// Check if this is the income category
    pub const fn is_income(&self) -> bool {
        matches!(self, Category::Income)
    }

    /// Spending categories (everything except `Income`) in display order
    ///
    /// Budgets only apply to spending categories.
    pub fn spending() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| !c.is_income())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for parsing an unknown category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
