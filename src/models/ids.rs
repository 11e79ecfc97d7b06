//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are small sequential integers handed out by the owning component,
//! starting at 1. Newtype wrappers keep ids of different entities apart at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate sequential ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The first id handed out by a fresh sequence
            pub const FIRST: Self = Self(1);

            /// Wrap a raw id value
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Get the raw id value
            pub const fn value(&self) -> u32 {
                self.0
            }

            /// The id that follows this one in the sequence
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::FIRST
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(TransactionId);
define_id!(UserId);
