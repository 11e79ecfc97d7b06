//! Service layer for the expense tracker
//!
//! Each service owns its data outright. Cross-component checks (a
//! transaction or budget must name a registered category) are made by
//! passing the `CategoryRegistry` into the write operations.

pub mod budget;
pub mod category;
pub mod credentials;
pub mod ledger;

pub use budget::BudgetTable;
pub use category::CategoryRegistry;
pub use credentials::CredentialStore;
pub use ledger::{Ledger, TransactionEdit};
