//! Mock searcher for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::searcher::{PostSearcher, RawPost, SearchError, SearchRequest};

/// A recorded search for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    /// The request that was sent.
    pub request: SearchRequest,
    /// When the search was made.
    pub timestamp: Instant,
}

/// Produces results from the request once scripted responses run out.
type SearchHandler = Box<dyn Fn(&SearchRequest) -> Vec<RawPost> + Send + Sync>;

/// Mock implementation of the PostSearcher trait.
///
/// Provides controllable behavior for testing:
/// - Return scripted results or errors, one per search
/// - Fall back to a handler (or no posts) once the script is empty
/// - Track search requests for assertions
///
/// # Example
///
/// ```rust,ignore
/// use lyricline_core::testing::{MockSearcher, fixtures};
///
/// let searcher = MockSearcher::new();
/// searcher
///     .push_results(vec![fixtures::post(1, fixtures::minutes_from_now(1), "Ground")])
///     .await;
/// searcher.push_error(SearchError::Timeout).await;
///
/// // ...run the orchestrator...
///
/// let searches = searcher.recorded_searches().await;
/// assert!(searches[0].request.query.contains("ground"));
/// ```
pub struct MockSearcher {
    /// Responses returned in order, one per search.
    responses: Arc<RwLock<VecDeque<Result<Vec<RawPost>, SearchError>>>>,
    /// Recorded search requests.
    searches: Arc<RwLock<Vec<RecordedSearch>>>,
    /// Fallback when no scripted response is left.
    handler: Arc<RwLock<Option<SearchHandler>>>,
    /// Simulated latency.
    delay: Arc<RwLock<Option<Duration>>>,
}

impl std::fmt::Debug for MockSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSearcher")
            .field("responses", &"<responses>")
            .field("searches", &"<searches>")
            .field("handler", &"<handler>")
            .field("delay", &"<delay>")
            .finish()
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearcher {
    /// Create a new mock searcher that returns no posts.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(VecDeque::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            handler: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Queue the posts returned by the next unscripted search.
    pub async fn push_results(&self, posts: Vec<RawPost>) {
        self.responses.write().await.push_back(Ok(posts));
    }

    /// Queue a failure for the next unscripted search.
    pub async fn push_error(&self, error: SearchError) {
        self.responses.write().await.push_back(Err(error));
    }

    /// Answer searches from `handler` once the script is exhausted.
    pub async fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&SearchRequest) -> Vec<RawPost> + Send + Sync + 'static,
    {
        *self.handler.write().await = Some(Box::new(handler));
    }

    /// Delay every search by `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Get all recorded searches.
    pub async fn recorded_searches(&self) -> Vec<RecordedSearch> {
        self.searches.read().await.clone()
    }

    /// Number of searches made so far.
    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }

    /// Clear recorded searches.
    pub async fn clear_searches(&self) {
        self.searches.write().await.clear();
    }
}

#[async_trait]
impl PostSearcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPost>, SearchError> {
        self.searches.write().await.push(RecordedSearch {
            request: request.clone(),
            timestamp: Instant::now(),
        });

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(response) = self.responses.write().await.pop_front() {
            return response;
        }

        match self.handler.read().await.as_ref() {
            Some(handler) => Ok(handler(request)),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let searcher = MockSearcher::new();
        searcher
            .push_results(vec![fixtures::post(1, fixtures::minutes_ago(1), "a")])
            .await;
        searcher.push_error(SearchError::RateLimited).await;

        let request = SearchRequest::recent("a", 100);
        assert_eq!(searcher.search(&request).await.unwrap().len(), 1);
        assert!(matches!(
            searcher.search(&request).await,
            Err(SearchError::RateLimited)
        ));
        assert!(searcher.search(&request).await.unwrap().is_empty());
        assert_eq!(searcher.search_count().await, 3);
    }

    #[tokio::test]
    async fn test_handler_fallback() {
        let searcher = MockSearcher::new();
        searcher
            .set_handler(|request| {
                vec![fixtures::post(
                    request.since_id.unwrap_or(0) + 1,
                    fixtures::minutes_ago(1),
                    "tom",
                )]
            })
            .await;

        let posts = searcher
            .search(&SearchRequest::recent("tom", 100).with_since_id(Some(41)))
            .await
            .unwrap();
        assert_eq!(posts[0].post_id().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let searcher = MockSearcher::new();
        searcher
            .search(&SearchRequest::recent("major", 10))
            .await
            .unwrap();

        let searches = searcher.recorded_searches().await;
        assert_eq!(searches[0].request.query, "major");

        searcher.clear_searches().await;
        assert_eq!(searcher.search_count().await, 0);
    }
}
