use serde::{Deserialize, Serialize};

use theater_core::{DomainResult, ValueObject};

use crate::genre::Genre;

/// Static metadata of a play.
///
/// The genre is kept as supplied by the catalog loader; it is only resolved
/// into a [`Genre`] when a statement prices the play, so an unrecognized genre
/// fails that statement rather than the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    name: String,
    #[serde(rename = "type")]
    genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Tragedy.as_str())
    }

    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Comedy.as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw genre string as supplied (e.g. `"tragedy"`).
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Resolve the genre, failing with `UnknownPlayType` for anything not in
    /// [`Genre`].
    pub fn kind(&self) -> DomainResult<Genre> {
        self.genre.parse()
    }
}

impl ValueObject for Play {}
