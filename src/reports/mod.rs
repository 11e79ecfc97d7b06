//! Reports module for the expense tracker
//!
//! Read-only aggregations over the ledger and budget table.

pub mod spending;

pub use spending::{SpendingReport, SpendingRow};
