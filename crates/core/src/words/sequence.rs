//! The ordered word list a run collects.

use std::sync::Arc;

use thiserror::Error;

use super::text::canonicalize;
use crate::store::{StoreError, WordStore};

/// Errors raised while loading the word list.
#[derive(Debug, Error)]
pub enum WordsError {
    #[error("No words to collect")]
    NoWordsToCollect,

    #[error("Storage error when getting words list: {0}")]
    Store(#[from] StoreError),
}

/// A word and its 0-based position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub position: usize,
    pub text: String,
}

impl Word {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Lowercased, ASCII-folded form used for matching and queries.
    pub fn canonical(&self) -> String {
        canonicalize(&self.text)
    }
}

/// Immutable, ordered list of words. Duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct WordSequence {
    words: Arc<[Word]>,
}

impl WordSequence {
    /// Build a sequence from tokens in order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<Word> = tokens
            .into_iter()
            .enumerate()
            .map(|(position, text)| Word::new(position, text))
            .collect();
        Self {
            words: words.into(),
        }
    }

    /// Fetch the word list from the store.
    ///
    /// An empty list is a fatal precondition failure.
    pub fn load(store: &dyn WordStore) -> Result<Self, WordsError> {
        let words = store.get_words()?;
        if words.is_empty() {
            return Err(WordsError::NoWordsToCollect);
        }
        Ok(Self::from_tokens(words))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Index of the last word, `None` for an empty sequence.
    pub fn last_index(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[test]
    fn test_from_tokens_assigns_positions() {
        let seq = WordSequence::from_tokens(["ground", "control", "ground"]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.last_index(), Some(2));
        assert_eq!(seq.get(2), Some(&Word::new(2, "ground")));
        assert!(seq.get(3).is_none());
    }

    #[test]
    fn test_word_canonical() {
        assert_eq!(Word::new(0, "Ça").canonical(), "ca");
    }

    #[test]
    fn test_empty_sequence() {
        let seq = WordSequence::from_tokens(Vec::<String>::new());
        assert!(seq.is_empty());
        assert_eq!(seq.last_index(), None);
    }

    #[test]
    fn test_load_from_store() {
        let store = MemoryStore::with_words(["ground", "control"]);
        let seq = WordSequence::load(&store).unwrap();
        let texts: Vec<_> = seq.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["ground", "control"]);
    }

    #[test]
    fn test_load_empty_store_fails() {
        let store = MemoryStore::new();
        let err = WordSequence::load(&store).unwrap_err();
        assert!(matches!(err, WordsError::NoWordsToCollect));
    }
}
