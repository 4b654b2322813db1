//! Durable storage for the word list and the three post collections.

mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{CollectionKind, CollectionStore, StoreError, WordStore};
