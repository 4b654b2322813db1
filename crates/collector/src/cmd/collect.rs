use std::sync::Arc;

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use tokio::signal;
use tracing::{debug, info, warn};

use lyricline_core::{
    metrics, CollectionOrchestrator, CollectionStore, Config, PostSearcher, RunSummary,
    SanitizedConfig, SearchBackend, SqliteStore, TwitterSearcher, WordStore,
};

use crate::lock::RunLock;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run(config: &Config) -> Result<()> {
    let lock = RunLock::acquire(&config.collector.lock_path)?;
    info!("Acquired run lock {:?}", lock.path());

    let sanitized = SanitizedConfig::from(config);
    let config_json = serde_json::to_string(&sanitized).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    info!(
        version = VERSION,
        config_hash = &config_hash[..16],
        store = ?config.store.path,
        "Starting collection"
    );

    let store = Arc::new(
        SqliteStore::new(&config.store.path).context("Failed to open collection store")?,
    );
    let searcher: Arc<dyn PostSearcher> = match config.search.backend {
        SearchBackend::Twitter => {
            if config.search.twitter.bearer_token.is_empty() {
                bail!("search.twitter.bearer_token is not set (see `lyricline token`)");
            }
            Arc::new(
                TwitterSearcher::new(config.search.twitter.clone())
                    .context("Failed to create Twitter searcher")?,
            )
        }
    };
    info!("Using searcher: {}", searcher.name());

    let orchestrator = CollectionOrchestrator::new(
        config.collector.clone(),
        Arc::clone(&store) as Arc<dyn WordStore>,
        store as Arc<dyn CollectionStore>,
        searcher,
    );

    let summary = tokio::select! {
        result = orchestrator.run() => result.context("Collection failed")?,
        _ = signal::ctrl_c() => {
            warn!(run_id = %orchestrator.run_id(), "Interrupted, collection discarded");
            bail!("Collection interrupted");
        }
    };

    print_summary(&summary);
    debug!("Final metrics:\n{}", metrics::gather_metrics());
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Collected {} of {} words in {} rounds ({} productive, {} vain, {} failed)",
        summary.words_collected,
        summary.words_total,
        summary.rounds_total,
        summary.rounds_productive,
        summary.rounds_vain,
        summary.rounds_failed
    );
    println!(
        "Persisted {} items ({} retries), {} malformed posts skipped",
        summary.persistence_writes, summary.persistence_retries, summary.posts_skipped
    );
    println!(
        "Run {} finished at {} after {}s",
        summary.run_id,
        summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
        summary.duration().num_seconds()
    );
}
