//! Collector configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the collection orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Tag appended to every query term while hashtag mode is on.
    #[serde(default = "default_priority_hashtag")]
    pub priority_hashtag: String,

    /// Maximum number of distinct terms searched in one round.
    #[serde(default = "default_words_per_round")]
    pub words_per_round: usize,

    /// Consecutive vain rounds after which rounds narrow to a single word.
    #[serde(default = "default_vain_rounds_until_focus")]
    pub vain_rounds_until_focus: u32,

    /// Consecutive vain rounds after which hashtag mode is switched off.
    #[serde(default = "default_vain_hashtag_rounds_max")]
    pub vain_hashtag_rounds_max: u32,

    /// Page size requested from the search service.
    #[serde(default = "default_items_per_request")]
    pub items_per_request: u32,

    /// Length of the search provider's rate-limit window (seconds).
    #[serde(default = "default_rate_window_secs")]
    pub rate_window_secs: u64,

    /// Requests allowed per rate-limit window.
    #[serde(default = "default_rate_max_requests")]
    pub rate_max_requests: u32,

    /// Delay before a failed persistence write is retried (milliseconds).
    #[serde(default = "default_persistence_retry_delay_ms")]
    pub persistence_retry_delay_ms: u64,

    /// Marker file preventing concurrent runs.
    #[serde(default = "default_lock_path")]
    pub lock_path: PathBuf,
}

impl CollectorConfig {
    /// Fixed delay between round starts.
    pub fn round_interval(&self) -> Duration {
        let max = self.rate_max_requests.max(1) as f64;
        Duration::from_secs_f64(self.rate_window_secs as f64 / max)
    }

    pub fn persistence_retry_delay(&self) -> Duration {
        Duration::from_millis(self.persistence_retry_delay_ms)
    }
}

fn default_priority_hashtag() -> String {
    "#singwithbowie".to_string()
}

fn default_words_per_round() -> usize {
    3
}

fn default_vain_rounds_until_focus() -> u32 {
    5
}

fn default_vain_hashtag_rounds_max() -> u32 {
    1
}

fn default_items_per_request() -> u32 {
    100
}

fn default_rate_window_secs() -> u64 {
    15 * 60
}

fn default_rate_max_requests() -> u32 {
    450
}

fn default_persistence_retry_delay_ms() -> u64 {
    500
}

fn default_lock_path() -> PathBuf {
    PathBuf::from("./lyricline.lock")
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            priority_hashtag: default_priority_hashtag(),
            words_per_round: default_words_per_round(),
            vain_rounds_until_focus: default_vain_rounds_until_focus(),
            vain_hashtag_rounds_max: default_vain_hashtag_rounds_max(),
            items_per_request: default_items_per_request(),
            rate_window_secs: default_rate_window_secs(),
            rate_max_requests: default_rate_max_requests(),
            persistence_retry_delay_ms: default_persistence_retry_delay_ms(),
            lock_path: default_lock_path(),
        }
    }
}
