//! Newtype wrappers for generated identifiers.
//!
//! Identifiers label output for the presentation layer; nothing in the
//! packing algorithm reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// An identifier for a sealed page.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(Arc<str>);

impl PageId {
    /// Creates a PageId from an existing string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random (v4) UUID identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
