//! Plays domain module.
//!
//! Play metadata (name + genre) and the catalog the statement engine reads it
//! from. Pure data: no IO, no storage.

pub mod catalog;
pub mod genre;
pub mod play;

pub use catalog::{PlayCatalog, PlayLookup};
pub use genre::Genre;
pub use play::Play;
