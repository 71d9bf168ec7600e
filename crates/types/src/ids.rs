//! Newtype wrapper for section identifiers.
//!
//! Section ids are normalized at construction so that two raw ids which
//! differ only in case or in stripped characters compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An identifier for a registered style section.
///
/// The raw input is normalized to the restricted character set
/// `[a-z0-9_-]`: uppercase letters are lowercased, everything else is
/// stripped. A raw id that normalizes to the empty string is invalid and
/// must be rejected by the caller.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Creates a new `SectionId`, normalizing the raw input.
    pub fn new(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
            .collect();
        Self(normalized.into())
    }

    /// Returns the normalized string representation of this id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if normalization stripped the id down to nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
