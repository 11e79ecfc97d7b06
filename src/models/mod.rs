//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! transactions, budgets, user credentials and money amounts.

pub mod budget;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use ids::{TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
pub use user::User;
