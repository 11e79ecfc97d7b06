//! Append-only audit log file
//!
//! Each entry is written as a single JSON line (JSONL) and flushed
//! immediately.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Writes audit entries to a JSONL file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a logger that appends to the given path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry to the log, creating the file and its parent
    /// directory on first use
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrackerError::Io(format!("Failed to create audit log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrackerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }
}

/// Parse every line of an audit log written by `AuditLogger`
#[cfg(test)]
pub(crate) fn read_log(path: &std::path::Path) -> Vec<AuditEntry> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, PathBuf, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("audit.log");
        (AuditLogger::new(path.clone()), path, temp_dir)
    }

    #[test]
    fn test_log_creates_parent_dir() {
        let (logger, path, _temp) = create_test_logger();
        let entry = AuditEntry::create(EntityType::Category, "Pets", &json!("Pets"));

        logger.log(&entry).unwrap();

        let entries = read_log(&path);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, "Pets");
    }

    #[test]
    fn test_appends_in_order() {
        let (logger, path, _temp) = create_test_logger();
        for i in 1..=3 {
            let entry =
                AuditEntry::delete(EntityType::Transaction, i.to_string(), &json!({"id": i}));
            logger.log(&entry).unwrap();
        }

        let ids: Vec<String> = read_log(&path).into_iter().map(|e| e.entity_id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let logger = AuditLogger::new(blocker.join("audit.log"));

        let entry = AuditEntry::create(EntityType::Category, "Pets", &json!("Pets"));
        assert!(matches!(logger.log(&entry), Err(TrackerError::Io(_))));
    }
}
