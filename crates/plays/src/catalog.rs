use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult, PlayId};

use crate::play::Play;

/// Read-only lookup from play id to play metadata.
///
/// The statement engine is generic over this so callers can hand it whatever
/// map their loader produced.
pub trait PlayLookup {
    fn play(&self, id: &PlayId) -> Option<&Play>;

    /// Like [`PlayLookup::play`], but a missing id is an `UnknownPlay` error.
    fn require(&self, id: &PlayId) -> DomainResult<&Play> {
        self.play(id)
            .ok_or_else(|| DomainError::unknown_play(id.clone()))
    }
}

/// Catalog of plays keyed by unique [`PlayId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn try_from_iter<I>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (PlayId, Play)>,
    {
        let mut catalog = Self::new();
        for (id, play) in entries {
            catalog.insert(id, play)?;
        }
        Ok(catalog)
    }

    /// Add a play. Keys are unique: an existing id is left untouched and the
    /// insert fails with `Conflict`.
    pub fn insert(&mut self, id: PlayId, play: Play) -> DomainResult<()> {
        if self.plays.contains_key(&id) {
            return Err(DomainError::conflict(format!("duplicate play id: {id}")));
        }
        self.plays.insert(id, play);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plays.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}

impl PlayLookup for PlayCatalog {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }
}

impl<S: BuildHasher> PlayLookup for HashMap<PlayId, Play, S> {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        self.get(id)
    }
}

impl PlayLookup for BTreeMap<PlayId, Play> {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        self.get(id)
    }
}

impl<T: PlayLookup + ?Sized> PlayLookup for &T {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        (**self).play(id)
    }
}
