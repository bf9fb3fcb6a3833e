//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a play in a catalog (e.g. `"hamlet"`).
///
/// Performances reference plays through this key; it is never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayId(String);

impl PlayId {
    /// Create an identifier, rejecting empty or all-whitespace keys.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("play id must not be empty"));
        }
        Ok(Self(id))
    }

    /// Build an identifier from a literal known to be valid.
    ///
    /// Panics on an empty literal; meant for fixtures and constants.
    pub fn from_static(id: &'static str) -> Self {
        assert!(!id.trim().is_empty(), "play id must not be empty");
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlayId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlayId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayId> for String {
    fn from(value: PlayId) -> Self {
        value.0
    }
}

impl core::borrow::Borrow<str> for PlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
