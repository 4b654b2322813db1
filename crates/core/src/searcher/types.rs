//! Types for the post search boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RawPost;

/// Ranking/recency mode requested from the search service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    #[default]
    Recent,
    Popular,
    Mixed,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Recent => "recent",
            ResultType::Popular => "popular",
            ResultType::Mixed => "mixed",
        }
    }
}

/// Parameters for a single search request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query string in the provider's syntax (`a OR b`).
    pub query: String,
    pub result_type: ResultType,
    /// Page size.
    pub count: u32,
    /// Only return posts newer than this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
}

impl SearchRequest {
    pub fn recent(query: impl Into<String>, count: u32) -> Self {
        Self {
            query: query.into(),
            result_type: ResultType::Recent,
            count,
            since_id: None,
        }
    }

    pub fn with_since_id(mut self, since_id: Option<u64>) -> Self {
        self.since_id = since_id;
        self
    }
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Search backend API error: {0}")]
    ApiError(String),

    #[error("Search backend rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Rate limited by search backend")]
    RateLimited,

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Trait for live post search backends.
#[async_trait]
pub trait PostSearcher: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Execute a search.
    ///
    /// Posts come back in the provider's native order, which callers must not
    /// rely on.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPost>, SearchError>;
}
