//! Transaction display formatting

use crate::config::Settings;
use crate::models::Transaction;

/// Format one transaction as a single listing line
pub fn format_transaction(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "Id: {}, Date: {}, Amount: {}, Type: {}, Category: {}",
        txn.id,
        txn.date.format(&settings.date_format),
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.kind,
        txn.category
    )
}

/// Format the whole ledger, one transaction per line
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions to display.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction(txn, settings));
        output.push('\n');
    }
    output
}
