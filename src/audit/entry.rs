//! Audit records
//!
//! One `AuditEntry` per successful write: what kind of change, to which
//! record, and JSON snapshots of the record around the change.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of record that changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Category,
    Budget,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "Transaction",
            Self::Category => "Category",
            Self::Budget => "Budget",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit record
///
/// `before` is present for updates and deletes, `after` for creates and
/// updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,

    /// Transaction id, or the category name for categories and budgets
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Field-level summary of an update, e.g. `amount: "50" -> "60"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        let diff_summary = match (operation, &before, &after) {
            (Operation::Update, Some(b), Some(a)) => super::generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            before,
            after,
            diff_summary,
        }
    }

    /// A record that did not exist before
    pub fn create<T: Serialize>(entity_type: EntityType, entity_id: impl Into<String>, entity: &T) -> Self {
        Self::record(Operation::Create, entity_type, entity_id, None, snapshot(entity))
    }

    /// A record changed in place; the diff is computed from both snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self::record(
            Operation::Update,
            entity_type,
            entity_id,
            snapshot(before),
            snapshot(after),
        )
    }

    /// A record that no longer exists
    pub fn delete<T: Serialize>(entity_type: EntityType, entity_id: impl Into<String>, entity: &T) -> Self {
        Self::record(Operation::Delete, entity_type, entity_id, snapshot(entity), None)
    }
}

/// One line: `[timestamp] OPERATION Entity id (changes)`
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;
        if let Some(diff) = &self.diff_summary {
            write!(f, " ({})", diff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.as_str(), "DELETE");
        assert_eq!(EntityType::Budget.to_string(), "Budget");
    }

    #[test]
    fn test_create_has_only_after() {
        let entry = AuditEntry::create(EntityType::Category, "Travel", &"Travel");
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "Travel");
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!("Travel")));
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_update_computes_diff() {
        let before = json!({"amount": "50", "category": "Food"});
        let after = json!({"amount": "75", "category": "Food"});
        let entry = AuditEntry::update(EntityType::Transaction, "1", &before, &after);

        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("amount: \"50\" -> \"75\"")
        );
        assert!(entry.to_string().ends_with("UPDATE Transaction 1 (amount: \"50\" -> \"75\")"));
    }

    #[test]
    fn test_delete_has_only_before() {
        let entry = AuditEntry::delete(EntityType::Transaction, "4", &json!({"id": 4}));
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
        assert!(entry.to_string().ends_with("DELETE Transaction 4"));
    }

    #[test]
    fn test_json_line_omits_empty_snapshots() {
        let entry = AuditEntry::create(EntityType::Category, "Pets", &"Pets");
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains(r#""operation":"create""#));
        assert!(line.contains(r#""entity_type":"category""#));
        assert!(!line.contains("before"));
        assert!(!line.contains("diff_summary"));

        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert!(parsed.before.is_none());
        assert_eq!(parsed.entity_id, "Pets");
    }
}
