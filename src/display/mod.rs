//! Display formatting for terminal output
//!
//! Pure functions that render models and reports as text. Every function
//! returns newline-terminated lines ready to be written to the console.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::format_budget_list;
pub use category::format_category_list;
pub use report::format_spending_report;
pub use transaction::{format_transaction, format_transaction_list};
