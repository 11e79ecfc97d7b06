//! Budget display formatting

use crate::models::Budget;

/// Format every budget entry as `<category>: <amount>`
pub fn format_budget_list(budgets: &[Budget], currency_symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    budgets
        .iter()
        .map(|b| format!("{}: {}\n", b.category, b.amount.format_with_symbol(currency_symbol)))
        .collect()
}
