//! User settings for the expense tracker
//!
//! Settings are read from an optional JSON file. Every field has a default,
//! so a missing file or a partial file is fine. Settings are never written
//! back.

use std::fmt;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::error::TrackerError;

/// A credential seeded into the credential store at startup
#[derive(Clone, Deserialize)]
pub struct SeedUser {
    pub login_id: String,
    pub password: String,
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("login_id", &self.login_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for transaction listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Categories present at startup, in display order
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    /// Credentials present at startup
    #[serde(default = "default_seed_users")]
    pub seed_users: Vec<SeedUser>,

    /// Whether audit entries are also appended to the audit log file
    #[serde(default)]
    pub audit_log: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_categories() -> Vec<String> {
    vec!["Food".into(), "Utilities".into(), "Transport".into()]
}

fn default_seed_users() -> Vec<SeedUser> {
    vec![SeedUser {
        login_id: "test".into(),
        password: "test".into(),
    }]
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_categories: default_categories(),
            seed_users: default_seed_users(),
            audit_log: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, TrackerError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load settings from `path`, failing if the file is missing
    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would fail later at display time
    pub fn validate(&self) -> Result<(), TrackerError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}
