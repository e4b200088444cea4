//! Receipt extraction result
//!
//! Transient record produced by the receipt scanning adapter. It mirrors the
//! JSON shape the external service is asked to return: a transaction minus
//! id and kind. Fields arrive as loosely-typed wire values and are resolved
//! to domain types here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// Structured fields extracted from a receipt image
///
/// All four fields are required in the service response; a response missing
/// any of them fails deserialization and the scan is treated as a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Total amount in currency units
    pub amount: f64,

    /// Store or merchant name
    pub description: String,

    /// Category label; expected to come from the fixed vocabulary but
    /// not guaranteed to
    pub category: String,

    /// Date in YYYY-MM-DD form
    pub date: String,
}

impl ReceiptData {
    /// The extracted amount, rounded to the nearest cent
    pub fn amount_money(&self) -> Money {
        Money::from_float(self.amount)
    }

    /// Resolve the category label against the fixed vocabulary
    ///
    /// Unrecognized labels fall back to `Other`.
    pub fn resolved_category(&self) -> Category {
        self.category.parse().unwrap_or_default()
    }

    /// Parse the extracted date, falling back to the given date when the
    /// service returned something unparseable
    pub fn resolved_date(&self, fallback: NaiveDate) -> NaiveDate {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReceiptData {
        ReceiptData {
            amount: 42.5,
            description: "Blue Bottle Coffee".to_string(),
            category: "Food & Drink".to_string(),
            date: "2024-03-05".to_string(),
        }
    }

    #[test]
    fn test_amount_rounds_to_cents() {
        let mut receipt = sample();
        receipt.amount = 19.999;
        assert_eq!(receipt.amount_money().cents(), 2000);
    }

    #[test]
    fn test_category_resolution() {
        assert_eq!(sample().resolved_category(), Category::FoodAndDrink);

        let mut receipt = sample();
        receipt.category = "Snacks".to_string();
        assert_eq!(receipt.resolved_category(), Category::Other);
    }

    #[test]
    fn test_date_resolution() {
        let fallback = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            sample().resolved_date(fallback),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );

        let mut receipt = sample();
        receipt.date = "March 5th".to_string();
        assert_eq!(receipt.resolved_date(fallback), fallback);
    }

    #[test]
    fn test_all_fields_required() {
        let missing_date = r#"{"amount": 10.0, "description": "Store", "category": "Other"}"#;
        assert!(serde_json::from_str::<ReceiptData>(missing_date).is_err());

        let complete =
            r#"{"amount": 10.0, "description": "Store", "category": "Other", "date": "2024-01-02"}"#;
        assert!(serde_json::from_str::<ReceiptData>(complete).is_ok());
    }
}
