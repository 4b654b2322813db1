//! In-memory word and collection store for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::store::{CollectionKind, CollectionStore, StoreError, WordStore};

/// In-memory implementation of both store traits.
///
/// Failures can be injected for appends and rotation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: Mutex<Vec<String>>,
    collections: Mutex<HashMap<CollectionKind, Vec<String>>>,
    /// Number of upcoming appends that will fail before writes succeed again.
    failing_appends: AtomicUsize,
    append_attempts: AtomicUsize,
    rotation_error: Mutex<Option<StoreError>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        *store.words.lock().unwrap() = words.into_iter().map(Into::into).collect();
        store
    }

    /// Make the next `count` appends fail.
    pub fn fail_next_appends(&self, count: usize) {
        self.failing_appends.store(count, Ordering::SeqCst);
    }

    /// Make the next rotation fail with `error`.
    pub fn fail_rotation(&self, error: StoreError) {
        *self.rotation_error.lock().unwrap() = Some(error);
    }

    /// Appends attempted so far, failed ones included.
    pub fn append_attempts(&self) -> usize {
        self.append_attempts.load(Ordering::SeqCst)
    }

    /// Seed a collection directly.
    pub fn set_collection<I, S>(&self, kind: CollectionKind, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections
            .lock()
            .unwrap()
            .insert(kind, items.into_iter().map(Into::into).collect());
    }
}

impl WordStore for MemoryStore {
    fn get_words(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.words.lock().unwrap().clone())
    }

    fn set_words(&self, words: &[String]) -> Result<(), StoreError> {
        *self.words.lock().unwrap() = words.to_vec();
        Ok(())
    }
}

impl CollectionStore for MemoryStore {
    fn append_upcoming(&self, item: &str) -> Result<(), StoreError> {
        self.append_attempts.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failing_appends
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if failing.is_ok() {
            return Err(StoreError::Database("injected append failure".to_string()));
        }

        self.collections
            .lock()
            .unwrap()
            .entry(CollectionKind::Upcoming)
            .or_default()
            .push(item.to_string());
        Ok(())
    }

    fn clear_upcoming(&self) -> Result<(), StoreError> {
        self.collections
            .lock()
            .unwrap()
            .remove(&CollectionKind::Upcoming);
        Ok(())
    }

    fn rotate_collections(&self) -> Result<(), StoreError> {
        if let Some(error) = self.rotation_error.lock().unwrap().take() {
            return Err(error);
        }

        let mut collections = self.collections.lock().unwrap();
        let upcoming = match collections.remove(&CollectionKind::Upcoming) {
            Some(items) if !items.is_empty() => items,
            _ => return Err(StoreError::NothingToRotate),
        };
        match collections.remove(&CollectionKind::Recent) {
            Some(recent) if !recent.is_empty() => {
                collections.insert(CollectionKind::Prev, recent);
            }
            _ => {}
        }
        collections.insert(CollectionKind::Recent, upcoming);
        Ok(())
    }

    fn members(&self, kind: CollectionKind) -> Result<Vec<String>, StoreError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_first_run() {
        let store = MemoryStore::new();
        store.set_collection(CollectionKind::Prev, ["old"]);
        store.append_upcoming("a").unwrap();

        store.rotate_collections().unwrap();
        assert_eq!(store.members(CollectionKind::Recent).unwrap(), vec!["a"]);
        assert_eq!(store.members(CollectionKind::Prev).unwrap(), vec!["old"]);
    }

    #[test]
    fn test_rotation_shifts_recent() {
        let store = MemoryStore::new();
        store.set_collection(CollectionKind::Recent, ["r"]);
        store.append_upcoming("u").unwrap();

        store.rotate_collections().unwrap();
        assert_eq!(store.members(CollectionKind::Prev).unwrap(), vec!["r"]);
        assert_eq!(store.members(CollectionKind::Recent).unwrap(), vec!["u"]);
        assert!(store.members(CollectionKind::Upcoming).unwrap().is_empty());
    }

    #[test]
    fn test_rotation_with_empty_recent_keeps_prev() {
        let store = MemoryStore::new();
        store.set_collection(CollectionKind::Prev, ["old"]);
        store.set_collection(CollectionKind::Recent, std::iter::empty::<&str>());
        store.append_upcoming("u").unwrap();

        store.rotate_collections().unwrap();
        assert_eq!(store.members(CollectionKind::Prev).unwrap(), vec!["old"]);
        assert_eq!(store.members(CollectionKind::Recent).unwrap(), vec!["u"]);
    }

    #[test]
    fn test_injected_append_failures() {
        let store = MemoryStore::new();
        store.fail_next_appends(2);

        assert!(store.append_upcoming("a").is_err());
        assert!(store.append_upcoming("a").is_err());
        store.append_upcoming("a").unwrap();

        assert_eq!(store.append_attempts(), 3);
        assert_eq!(store.members(CollectionKind::Upcoming).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_empty_upcoming_cannot_rotate() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.rotate_collections(),
            Err(StoreError::NothingToRotate)
        ));
    }
}
