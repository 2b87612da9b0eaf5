//! Structured entity keys.
//!
//! Some entities (inventory rows) have no single natural key and are addressed
//! by a composite of two fields. The portal historically joined those with an
//! underscore and split on it later; `EntityKey` keeps the parts structural
//! and confines the delimiter to the storage boundary. Decoding a composite
//! storage key splits on the *first* underscore only: the leading part is a
//! generated id that never contains the delimiter, so the rule is unambiguous.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter used in composite storage keys (`"5_O+"`).
pub const COMPOSITE_DELIMITER: char = '_';

/// Identifies the entity an audit record targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKey {
    /// Single natural key (`"42"`).
    Simple(String),
    /// Ordered parts joined with [`COMPOSITE_DELIMITER`] at the storage boundary.
    Composite(Vec<String>),
    /// No identifier could be determined for this capture.
    Unknown,
}

impl EntityKey {
    /// Build a simple key from any displayable id.
    pub fn simple(id: impl fmt::Display) -> Self {
        Self::Simple(id.to_string())
    }

    /// Build a two-part composite key (the only arity the portal produces).
    pub fn composite(first: impl fmt::Display, second: impl fmt::Display) -> Self {
        Self::Composite(vec![first.to_string(), second.to_string()])
    }

    /// The string stored in the `entity_id` column.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            Self::Simple(id) => id.clone(),
            Self::Composite(parts) => parts.join(&COMPOSITE_DELIMITER.to_string()),
            Self::Unknown => "unknown".to_string(),
        }
    }

    /// The fragment used in synthesized placeholder labels.
    #[must_use]
    pub fn display_fragment(&self) -> String {
        match self {
            Self::Unknown => "Unknown".to_string(),
            _ => self.storage_key(),
        }
    }

    /// Decode a stored composite key into (first, remainder).
    ///
    /// Returns `None` for keys without the delimiter.
    #[must_use]
    pub fn split_composite(storage_key: &str) -> Option<(&str, &str)> {
        let mut parts = storage_key.splitn(2, COMPOSITE_DELIMITER);
        match (parts.next(), parts.next()) {
            (Some(first), Some(rest)) if !first.is_empty() && !rest.is_empty() => {
                Some((first, rest))
            }
            _ => None,
        }
    }

    /// Whether this key carries no identifier.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
