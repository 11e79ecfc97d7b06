//! Budget model
//!
//! A single target amount for one category, independent of spending.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Budget amount assigned to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Name of the budgeted category
    pub category: String,

    /// Target amount
    pub amount: Money,
}

impl Budget {
    /// Create a new budget entry
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}
