//! Transaction entry form
//!
//! Holds raw field input for a new transaction together with per-field
//! "touched" state. Field errors are evaluated independently per field;
//! whether an error is *shown* depends on touched state, but whether the
//! form may be submitted does not. Submitting an invalid form marks every
//! field touched (so all errors surface) and performs no mutation.

use chrono::NaiveDate;

use crate::models::{Category, Money, ReceiptData, TransactionKind};
use crate::services::NewTransaction;

/// Error message for a missing or blank description
pub const ERR_DESCRIPTION_REQUIRED: &str = "Description is required";

/// Error message for a missing or unparseable amount
pub const ERR_AMOUNT_REQUIRED: &str = "Amount is required";

/// Error message for an amount that parsed but is not positive
pub const ERR_AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number";

/// Field-level error messages for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub amount: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl FieldErrors {
    /// Check if any error is present
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.description.is_none()
    }
}

/// Entry form state for a new transaction
#[derive(Debug, Clone)]
pub struct TransactionForm {
    /// Raw amount input
    pub amount: String,

    /// Raw description input
    pub description: String,

    /// Selected category
    pub category: Category,

    /// Selected date
    pub date: NaiveDate,

    /// Selected kind
    pub kind: TransactionKind,

    touched_amount: bool,
    touched_description: bool,
}

impl TransactionForm {
    /// Create an empty form with the given defaults
    pub fn new(default_category: Category, today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category: default_category,
            date: today,
            kind: TransactionKind::Expense,
            touched_amount: false,
            touched_description: false,
        }
    }

    /// Create a form pre-filled from a receipt extraction result
    ///
    /// The kind is forced to expense and both validated fields are marked
    /// touched so that any problem with the extracted values surfaces
    /// immediately.
    pub fn from_receipt(receipt: &ReceiptData, today: NaiveDate) -> Self {
        let mut form = Self::new(receipt.resolved_category(), today);
        form.amount = format!("{:.2}", receipt.amount);
        form.description = receipt.description.clone();
        form.date = receipt.resolved_date(today);
        form.kind = TransactionKind::Expense;
        form.touch_all();
        form
    }

    /// Mark the amount field as interacted with
    pub fn touch_amount(&mut self) {
        self.touched_amount = true;
    }

    /// Mark the description field as interacted with
    pub fn touch_description(&mut self) {
        self.touched_description = true;
    }

    /// Mark every field as interacted with
    pub fn touch_all(&mut self) {
        self.touched_amount = true;
        self.touched_description = true;
    }

    /// Validate the amount field
    fn amount_error(&self) -> Option<&'static str> {
        if self.amount.trim().is_empty() {
            return Some(ERR_AMOUNT_REQUIRED);
        }
        match Money::parse(&self.amount) {
            Err(_) => Some(ERR_AMOUNT_REQUIRED),
            Ok(amount) if !amount.is_positive() => Some(ERR_AMOUNT_NOT_POSITIVE),
            Ok(_) => None,
        }
    }

    /// Validate the description field
    fn description_error(&self) -> Option<&'static str> {
        if self.description.trim().is_empty() {
            Some(ERR_DESCRIPTION_REQUIRED)
        } else {
            None
        }
    }

    /// Errors to display, gated by touched state
    ///
    /// An invalid-but-untouched field produces no visible error.
    pub fn errors(&self) -> FieldErrors {
        FieldErrors {
            amount: if self.touched_amount {
                self.amount_error()
            } else {
                None
            },
            description: if self.touched_description {
                self.description_error()
            } else {
                None
            },
        }
    }

    /// Whether the form may be submitted
    ///
    /// Evaluated over the actual field values, independent of touched state.
    pub fn is_valid(&self) -> bool {
        self.amount_error().is_none() && self.description_error().is_none()
    }

    /// Attempt to submit the form
    ///
    /// On success, returns the input for the add mutation. On failure,
    /// marks every field touched and returns the full error set; no
    /// mutation input is produced.
    pub fn submit(&mut self) -> Result<NewTransaction, FieldErrors> {
        if !self.is_valid() {
            self.touch_all();
            return Err(self.errors());
        }

        let amount = Money::parse(&self.amount).expect("validated amount parses");

        Ok(NewTransaction {
            amount,
            description: self.description.trim().to_string(),
            category: Some(self.category),
            date: Some(self.date),
            kind: Some(self.kind),
        })
    }
}
