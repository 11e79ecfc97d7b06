//! Spending report display formatting

use crate::reports::SpendingReport;

/// Format the spending report, one line per category
pub fn format_spending_report(report: &SpendingReport, currency_symbol: &str) -> String {
    let mut output = String::new();
    for row in &report.rows {
        output.push_str(&format!(
            "{} - Spent: {}, Budget: {}\n",
            row.category,
            row.spent.format_with_symbol(currency_symbol),
            row.budget.format_with_symbol(currency_symbol)
        ));
    }
    output
}
