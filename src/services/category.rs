//! Category registry
//!
//! An insertion-ordered set of unique category names. Categories can be
//! added but never renamed or removed.

use crate::error::{TrackerError, TrackerResult};

/// Ordered set of category names
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with `names`, skipping repeats
    pub fn with_defaults<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            let name = name.into();
            if !registry.contains(&name) {
                registry.names.push(name);
            }
        }
        registry
    }

    /// Categories in insertion order
    pub fn list(&self) -> &[String] {
        &self.names
    }

    /// Exact, case-sensitive membership check
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Fail with `InvalidCategory` unless `name` is registered
    pub fn require(&self, name: &str) -> TrackerResult<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(TrackerError::category_not_found(name))
        }
    }

    /// Insert `name` if it is not already present
    ///
    /// Returns whether an insertion happened. Blank names are rejected.
    pub fn add(&mut self, name: &str) -> TrackerResult<bool> {
        if name.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.contains(name) {
            return Ok(false);
        }

        self.names.push(name.to_string());
        tracing::debug!(category = name, "added category");
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
