//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the search and store
//! traits, allowing whole runs to be tested without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use lyricline_core::testing::{fixtures, MemoryStore, MockSearcher};
//!
//! let store = MemoryStore::with_words(["ground", "control"]);
//! let searcher = MockSearcher::new();
//! searcher
//!     .push_results(vec![fixtures::post(1, fixtures::minutes_from_now(1), "Ground")])
//!     .await;
//! store.fail_next_appends(1);
//! ```

mod memory_store;
mod mock_searcher;

pub use memory_store::MemoryStore;
pub use mock_searcher::{MockSearcher, RecordedSearch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{DateTime, Duration, SubsecRound, Utc};

    use crate::searcher::{Hashtag, PostAuthor, PostEntities, RawPost, POST_TIME_FORMAT};

    /// Create a post with the given identifier, creation time and text.
    ///
    /// `#tags` in the text are listed as hashtag entities.
    pub fn post(id: u64, created_at: DateTime<Utc>, text: &str) -> RawPost {
        let hashtags = text
            .split_whitespace()
            .filter_map(|token| token.strip_prefix('#'))
            .map(|tag| Hashtag {
                text: Some(tag.to_string()),
                ..Default::default()
            })
            .collect();

        RawPost {
            id: Some(id),
            id_str: Some(id.to_string()),
            created_at: Some(format_time(created_at)),
            text: Some(text.to_string()),
            user: Some(PostAuthor {
                screen_name: Some("starman".to_string()),
                ..Default::default()
            }),
            entities: Some(PostEntities {
                hashtags,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Format a time the way the search service does.
    pub fn format_time(time: DateTime<Utc>) -> String {
        time.format(POST_TIME_FORMAT).to_string()
    }

    /// A whole-second time `minutes` before now.
    pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0) - Duration::minutes(minutes)
    }

    /// A whole-second time `minutes` after now.
    pub fn minutes_from_now(minutes: i64) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0) + Duration::minutes(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn test_fixture_post_round_trips_time() {
        let created = fixtures::minutes_ago(3);
        let post = fixtures::post(7, created, "Ground control #SingWithBowie");

        assert_eq!(post.created_time().unwrap(), created);
        assert_eq!(post.hashtags(), vec!["SingWithBowie"]);
        assert_eq!(
            post.permalink().unwrap(),
            "https://twitter.com/starman/status/7"
        );
    }
}
