//! Spending Report
//!
//! Pairs the summed transaction amounts of every registered category with
//! that category's budget.
//!
//! Income and expense amounts are summed as entered, without netting income
//! against spending.

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::services::{BudgetTable, CategoryRegistry, Ledger};

/// Spending and budget for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingRow {
    /// Category name
    pub category: String,
    /// Sum of all transaction amounts in the category
    pub spent: Money,
    /// Budget for the category (zero if none was set)
    pub budget: Money,
}

/// Spending Report
#[derive(Debug, Clone, Default)]
pub struct SpendingReport {
    /// One row per category, in registry order
    pub rows: Vec<SpendingRow>,
}

impl SpendingReport {
    /// Generate the report from the current state of the components
    ///
    /// Fails with `InvalidAmount` if a category total does not fit in a
    /// `Money`.
    pub fn generate(
        categories: &CategoryRegistry,
        ledger: &Ledger,
        budgets: &BudgetTable,
    ) -> TrackerResult<Self> {
        let rows = categories
            .list()
            .iter()
            .map(|category| {
                let spent = ledger
                    .in_category(category)
                    .try_fold(Money::zero(), |sum, txn| sum.checked_add(txn.amount))
                    .ok_or_else(|| {
                        TrackerError::InvalidAmount(format!(
                            "spending total for {} is out of range",
                            category
                        ))
                    })?;

                Ok(SpendingRow {
                    category: category.clone(),
                    spent,
                    budget: budgets.get(category),
                })
            })
            .collect::<TrackerResult<Vec<_>>>()?;

        Ok(Self { rows })
    }
}
