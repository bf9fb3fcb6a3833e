//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Statement generation is all-or-nothing: any of these aborts the render that
/// produced it and no partial statement is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A play's genre is not one the pricing rules know about.
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// A performance references a play id missing from the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A conflict occurred (e.g. duplicate catalog key).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn unknown_play_type(genre: impl Into<String>) -> Self {
        Self::UnknownPlayType(genre.into())
    }

    pub fn unknown_play(play_id: PlayId) -> Self {
        Self::UnknownPlay(play_id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_play_type_message_names_the_genre() {
        let err = DomainError::unknown_play_type("history");
        assert_eq!(err.to_string(), "unknown type: history");
    }

    #[test]
    fn unknown_play_message_names_the_play_id() {
        let err = DomainError::unknown_play(PlayId::from_static("othello"));
        assert_eq!(err.to_string(), "unknown play: othello");
    }
}
