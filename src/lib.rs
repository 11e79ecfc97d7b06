//! Expense Tracker - menu-driven personal finance tracker for the terminal
//!
//! This library provides the core of the Expense Tracker application: an
//! in-memory ledger of income and expense transactions, a registry of
//! spending categories, per-category budgets and a spending report, all
//! behind a simple login gate.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money, users)
//! - `services`: Credential store, category registry, ledger and budget table
//! - `reports`: Spending versus budget aggregation
//! - `display`: Terminal output formatting
//! - `audit`: Audit logging system
//! - `tracker`: Application state tying the services together
//! - `session`: Interactive login and menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::Settings;
//! use expense_tracker::session::Session;
//! use expense_tracker::tracker::Tracker;
//!
//! let tracker = Tracker::new(Settings::default());
//! let stdin = std::io::stdin();
//! let mut session = Session::new(tracker, stdin.lock(), std::io::stdout());
//! session.run()?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
