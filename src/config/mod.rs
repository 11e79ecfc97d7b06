//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings loading

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{SeedUser, Settings};
