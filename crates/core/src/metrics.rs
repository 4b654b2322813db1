//! Prometheus metrics for the collection run.
//!
//! This module provides metrics for:
//! - Rounds (outcome, duration, searches)
//! - Collected words
//! - Persistence (writes, retries)

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

/// Registry holding every collector metric.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    for metric in all_metrics() {
        registry.register(metric).unwrap();
    }
    registry
});

// =============================================================================
// Round Metrics
// =============================================================================

/// Rounds total by outcome.
pub static ROUNDS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("lyricline_rounds_total", "Total collection rounds"),
        &["outcome"], // "productive", "vain", "failed"
    )
    .unwrap()
});

/// Round duration in seconds.
pub static ROUND_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "lyricline_round_duration_seconds",
            "Duration of a round from planning to resolution",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["outcome"],
    )
    .unwrap()
});

/// Posts returned per search.
pub static POSTS_FETCHED: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "lyricline_posts_fetched",
            "Number of posts returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
    )
    .unwrap()
});

/// Words collected.
pub static WORDS_COLLECTED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("lyricline_words_collected_total", "Total words collected").unwrap()
});

/// Posts skipped for missing or invalid fields.
pub static POSTS_SKIPPED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "lyricline_posts_skipped_total",
        "Total malformed posts skipped during matching",
    )
    .unwrap()
});

// =============================================================================
// Persistence Metrics
// =============================================================================

/// Items appended to the upcoming collection.
pub static PERSISTENCE_WRITES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "lyricline_persistence_writes_total",
        "Total collection items written",
    )
    .unwrap()
});

/// Failed appends that were queued again.
pub static PERSISTENCE_RETRIES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "lyricline_persistence_retries_total",
        "Total collection writes retried after a failure",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(ROUNDS.clone()),
        Box::new(ROUND_DURATION.clone()),
        Box::new(POSTS_FETCHED.clone()),
        Box::new(WORDS_COLLECTED.clone()),
        Box::new(POSTS_SKIPPED.clone()),
        Box::new(PERSISTENCE_WRITES.clone()),
        Box::new(PERSISTENCE_RETRIES.clone()),
    ]
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
