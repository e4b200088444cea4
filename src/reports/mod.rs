//! Derived aggregates
//!
//! Pure, side-effect-free functions over the transaction and budget
//! collections. Nothing here is cached; personal-finance volumes make
//! recomputation on demand cheap.

pub mod spending;
pub mod summary;

pub use spending::{budget_progress, category_breakdown, current_month_spending};
pub use summary::{totals, Totals};
