//! Types for the collection orchestrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::searcher::SearchError;
use crate::store::StoreError;
use crate::words::WordsError;

/// Fatal errors that end a run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The word store returned an empty list.
    #[error("no words to collect")]
    NoWordsToCollect,

    /// Store error outside of rotation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The persistence writer task died.
    #[error("persistence worker failed: {0}")]
    PersistenceWorker(String),

    /// Finalizing the collections failed.
    #[error("cannot rotate collections: {0}")]
    CollectionRotation(StoreError),
}

impl From<WordsError> for OrchestratorError {
    fn from(e: WordsError) -> Self {
        match e {
            WordsError::NoWordsToCollect => OrchestratorError::NoWordsToCollect,
            WordsError::Store(e) => OrchestratorError::Store(e),
        }
    }
}

/// Errors scoped to a single round. The run continues from the same cursor.
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("round task failed: {0}")]
    Task(String),
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    #[default]
    Init,
    Running,
    Done,
    Failed,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Init => "init",
            RunPhase::Running => "running",
            RunPhase::Done => "done",
            RunPhase::Failed => "failed",
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    /// Number of words in the sequence.
    pub words_total: usize,
    pub words_collected: usize,
    pub rounds_total: u64,
    pub rounds_productive: u64,
    pub rounds_vain: u64,
    pub rounds_failed: u64,
    pub posts_skipped: u64,
    pub persistence_writes: u64,
    pub persistence_retries: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_error_conversion() {
        let err: OrchestratorError = WordsError::NoWordsToCollect.into();
        assert!(matches!(err, OrchestratorError::NoWordsToCollect));

        let err: OrchestratorError =
            WordsError::Store(StoreError::Database("gone".to_string())).into();
        assert!(matches!(err, OrchestratorError::Store(_)));
    }

    #[test]
    fn test_run_phase_serialization() {
        assert_eq!(serde_json::to_string(&RunPhase::Running).unwrap(), "\"running\"");
        assert_eq!(RunPhase::default(), RunPhase::Init);
        assert_eq!(RunPhase::Failed.as_str(), "failed");
    }

    #[test]
    fn test_summary_duration() {
        let started_at = Utc::now();
        let summary = RunSummary {
            run_id: Uuid::new_v4(),
            words_total: 5,
            words_collected: 5,
            rounds_total: 3,
            rounds_productive: 2,
            rounds_vain: 1,
            rounds_failed: 0,
            posts_skipped: 0,
            persistence_writes: 5,
            persistence_retries: 0,
            started_at,
            finished_at: started_at + chrono::Duration::seconds(6),
        };
        assert_eq!(summary.duration().num_seconds(), 6);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"words_collected\":5"));
    }
}
