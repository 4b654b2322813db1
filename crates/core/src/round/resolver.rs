//! Matches planned words against a round's posts.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::searcher::{ExtractionError, RawPost};
use crate::words::{post_terms, Word};

use super::CollectionCursor;

/// A word matched to the earliest qualifying post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub position: usize,
    pub word: String,
    /// Serialized post, as stored in the `upcoming` collection.
    pub payload: String,
    pub post_id: u64,
    pub post_time: DateTime<Utc>,
}

/// Result of resolving one round.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub records: Vec<MatchRecord>,
    /// Posts dropped because a required field was missing or invalid.
    pub skipped_posts: usize,
}

impl Resolution {
    pub fn matched(&self) -> usize {
        self.records.len()
    }
}

/// A post with everything the matcher needs already extracted.
struct Candidate {
    id: u64,
    time: DateTime<Utc>,
    terms: Vec<String>,
    payload: String,
}

impl Candidate {
    fn extract(post: &RawPost) -> Result<Self, ExtractionError> {
        post.check_decoded()?;
        Ok(Self {
            id: post.post_id()?,
            time: post.created_time()?,
            terms: post_terms(post.body()?),
            payload: post.to_payload()?,
        })
    }
}

/// Resolve `words` in order against `posts`, advancing `cursor` on every match.
///
/// Posts are scanned oldest first. The round stops at the first word without
/// a qualifying post, so later words are never matched out of order.
/// `on_match` runs as soon as each match is accepted.
pub fn resolve_round<F>(
    cursor: &mut CollectionCursor,
    words: &[Word],
    posts: &[RawPost],
    mut on_match: F,
) -> Resolution
where
    F: FnMut(&MatchRecord),
{
    let mut resolution = Resolution::default();

    let mut candidates = Vec::with_capacity(posts.len());
    for post in posts {
        match Candidate::extract(post) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                warn!(post_id = ?post.id, error = %e, "Skipping malformed post");
                resolution.skipped_posts += 1;
            }
        }
    }
    candidates.sort_by_key(|c| c.id);

    for word in words {
        let canonical = word.canonical();
        let floor = cursor.floor();

        let found = candidates
            .iter()
            .filter(|c| floor.admits(c.id, c.time))
            .find(|c| c.terms.contains(&canonical));

        let Some(candidate) = found else {
            debug!(index = word.position, word = %word.text, "No post found for word");
            break;
        };

        debug_assert_eq!(word.position, cursor.next_index());
        cursor.record_match(candidate.id, candidate.time, Utc::now());

        let record = MatchRecord {
            position: word.position,
            word: word.text.clone(),
            payload: candidate.payload.clone(),
            post_id: candidate.id,
            post_time: candidate.time,
        };
        on_match(&record);
        resolution.records.push(record);
    }

    resolution
}
