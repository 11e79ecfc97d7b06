//! Budget table
//!
//! Maps category names to a single budget amount. Setting a budget again
//! overwrites the previous amount. Categories without an entry have an
//! implicit budget of zero.

use crate::error::TrackerResult;
use crate::models::{Budget, Money};
use crate::services::CategoryRegistry;

/// Budget amounts keyed by category, in the order they were first set
#[derive(Debug, Clone, Default)]
pub struct BudgetTable {
    entries: Vec<Budget>,
}

impl BudgetTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget for `category`, returning the amount it replaced
    ///
    /// Fails with `InvalidCategory` if the category is not registered.
    /// Overwriting keeps the entry's original position.
    pub fn set(
        &mut self,
        registry: &CategoryRegistry,
        category: &str,
        amount: Money,
    ) -> TrackerResult<Option<Money>> {
        registry.require(category)?;

        let previous = match self.entries.iter_mut().find(|b| b.category == category) {
            Some(entry) => Some(std::mem::replace(&mut entry.amount, amount)),
            None => {
                self.entries.push(Budget::new(category, amount));
                None
            }
        };

        tracing::debug!(category, amount = %amount, "set budget");
        Ok(previous)
    }

    /// Budget for `category`, or zero if none was set
    pub fn get(&self, category: &str) -> Money {
        self.entries
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.amount)
            .unwrap_or_default()
    }

    /// All budget entries in insertion order
    pub fn list_all(&self) -> &[Budget] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
