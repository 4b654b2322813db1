use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Nothing to rotate: upcoming collection is empty")]
    NothingToRotate,
}

/// Named post collections.
///
/// `Upcoming` is built by the current run, `Recent` holds the last completed
/// run and `Prev` the run before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Upcoming,
    Recent,
    Prev,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Upcoming => "upcoming",
            CollectionKind::Recent => "recent",
            CollectionKind::Prev => "prev",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(CollectionKind::Upcoming),
            "recent" => Ok(CollectionKind::Recent),
            "prev" => Ok(CollectionKind::Prev),
            other => Err(format!("unknown collection: {}", other)),
        }
    }
}

/// Ordered list of words to collect
pub trait WordStore: Send + Sync {
    /// Get the stored words in order
    fn get_words(&self) -> Result<Vec<String>, StoreError>;

    /// Replace the stored words
    fn set_words(&self, words: &[String]) -> Result<(), StoreError>;
}

/// Append-only post collections with end-of-run rotation
pub trait CollectionStore: Send + Sync {
    /// Append a serialized post to the upcoming collection
    fn append_upcoming(&self, item: &str) -> Result<(), StoreError>;

    /// Remove all items from the upcoming collection
    fn clear_upcoming(&self) -> Result<(), StoreError>;

    /// Atomically move `recent` to `prev` and `upcoming` to `recent`
    ///
    /// A missing `recent` collection leaves `prev` untouched.
    fn rotate_collections(&self) -> Result<(), StoreError>;

    /// List a collection's items in insertion order
    fn members(&self, kind: CollectionKind) -> Result<Vec<String>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_kind_round_trips_through_str() {
        for kind in [
            CollectionKind::Upcoming,
            CollectionKind::Recent,
            CollectionKind::Prev,
        ] {
            assert_eq!(kind.as_str().parse::<CollectionKind>().unwrap(), kind);
        }
        assert!("archive".parse::<CollectionKind>().is_err());
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Database("disk full".to_string());
        assert_eq!(err.to_string(), "Database error: disk full");
    }
}
