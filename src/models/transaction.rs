//! Transaction model
//!
//! Represents a single income or expense entry in the ledger.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
}

impl TransactionType {
    /// Interpret free-form user input
    ///
    /// "Income" in any letter case selects `Income`; any other text
    /// selects `Expense`.
    pub fn from_input(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("income") {
            Self::Income
        } else {
            Self::Expense
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, unique within the ledger
    pub id: TransactionId,

    /// When the transaction was recorded
    pub date: DateTime<Local>,

    /// Amount as entered (never sign-adjusted by type)
    pub amount: Money,

    /// Name of a registered category
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a new transaction stamped with the current local time
    pub fn new(
        id: TransactionId,
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: Local::now(),
            amount,
            category: category.into(),
            kind,
        }
    }

}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} ({})",
            self.id, self.kind, self.amount, self.category
        )
    }
}
