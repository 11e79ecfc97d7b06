//! Audit trail for the expense tracker
//!
//! Every successful create, update or delete on a transaction, category or
//! budget is recorded as an `AuditEntry`. Each entry goes to the debug log
//! and, when a logger is attached, is appended to a JSONL file. Nothing is
//! kept in memory and the file is never read back.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

#[cfg(test)]
pub(crate) use logger::read_log;

use crate::error::TrackerResult;

/// Audit trail with an optional file sink
#[derive(Debug, Default)]
pub struct AuditTrail {
    logger: Option<AuditLogger>,
}

impl AuditTrail {
    /// Create a trail that only emits tracing events
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail that also appends every entry to `logger`
    pub fn with_logger(logger: AuditLogger) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    /// Record an entry
    pub fn record(&self, entry: &AuditEntry) -> TrackerResult<()> {
        tracing::debug!("audit {}", entry);

        match &self.logger {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}
