//! Collection orchestrator implementation.
//!
//! Runs one round at a time at a fixed cadence:
//! - Round: planned in the loop, then search, resolve, enqueue matches (spawned task)
//! - Persistence: one background writer for the whole run

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::metrics;
use crate::persistence::{create_persistence_queue, PersistenceHandle};
use crate::round::{
    plan_round, resolve_round, CollectionCursor, RoundOutcome, RoundPlan, SearchRound,
};
use crate::searcher::PostSearcher;
use crate::store::{CollectionStore, WordStore};
use crate::words::WordSequence;

use super::config::CollectorConfig;
use super::types::{OrchestratorError, RoundError, RunPhase, RunSummary};

/// Everything a round task needs, cloned out of the orchestrator.
#[derive(Clone)]
struct RoundContext {
    config: CollectorConfig,
    sequence: WordSequence,
    searcher: Arc<dyn PostSearcher>,
    persistence: PersistenceHandle,
}

/// What a completed round hands back to the loop.
struct RoundReport {
    cursor: CollectionCursor,
    outcome: RoundOutcome,
    matched: usize,
    skipped_posts: usize,
}

#[derive(Debug, Default)]
struct RoundCounters {
    total: u64,
    productive: u64,
    vain: u64,
    failed: u64,
    posts_skipped: u64,
}

/// The collection orchestrator - assembles the word sequence from live posts.
pub struct CollectionOrchestrator {
    config: CollectorConfig,
    word_store: Arc<dyn WordStore>,
    collection_store: Arc<dyn CollectionStore>,
    searcher: Arc<dyn PostSearcher>,
    run_id: Uuid,
    phase: watch::Sender<RunPhase>,
}

impl CollectionOrchestrator {
    /// Create a new orchestrator.
    pub fn new(
        config: CollectorConfig,
        word_store: Arc<dyn WordStore>,
        collection_store: Arc<dyn CollectionStore>,
        searcher: Arc<dyn PostSearcher>,
    ) -> Self {
        let (phase, _) = watch::channel(RunPhase::Init);
        Self {
            config,
            word_store,
            collection_store,
            searcher,
            run_id: Uuid::new_v4(),
            phase,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Current phase of the run.
    pub fn phase(&self) -> RunPhase {
        *self.phase.borrow()
    }

    /// Watch phase changes.
    pub fn subscribe_phase(&self) -> watch::Receiver<RunPhase> {
        self.phase.subscribe()
    }

    /// Collect every word, then rotate the collections.
    pub async fn run(&self) -> Result<RunSummary, OrchestratorError> {
        self.phase.send_replace(RunPhase::Init);
        let result = self.execute().await;
        match &result {
            Ok(summary) => {
                self.phase.send_replace(RunPhase::Done);
                info!(
                    run_id = %self.run_id,
                    words = summary.words_collected,
                    rounds = summary.rounds_total,
                    duration_secs = summary.duration().num_seconds(),
                    "Collection assembled"
                );
            }
            Err(e) => {
                self.phase.send_replace(RunPhase::Failed);
                error!(run_id = %self.run_id, "Collection run failed: {}", e);
            }
        }
        result
    }

    async fn execute(&self) -> Result<RunSummary, OrchestratorError> {
        let started_at = Utc::now();
        info!(run_id = %self.run_id, "Assembling new collection");

        let sequence = WordSequence::load(self.word_store.as_ref())?;
        self.collection_store.clear_upcoming()?;

        let mut cursor = CollectionCursor::new(started_at);
        let (persistence, writer) = create_persistence_queue(
            Arc::clone(&self.collection_store),
            self.config.persistence_retry_delay(),
        );
        let writer_task = tokio::spawn(writer.run());

        let ctx = RoundContext {
            config: self.config.clone(),
            sequence: sequence.clone(),
            searcher: Arc::clone(&self.searcher),
            persistence: persistence.clone(),
        };

        self.phase.send_replace(RunPhase::Running);
        info!(
            words = sequence.len(),
            interval_ms = self.config.round_interval().as_millis() as u64,
            "Collecting words"
        );

        let counters = self.round_loop(&ctx, &mut cursor).await;
        drop(ctx);

        persistence.stop();
        drop(persistence);
        let persisted = writer_task
            .await
            .map_err(|e| OrchestratorError::PersistenceWorker(e.to_string()))?;

        self.collection_store
            .rotate_collections()
            .map_err(OrchestratorError::CollectionRotation)?;
        info!("Collections rotated");

        Ok(RunSummary {
            run_id: self.run_id,
            words_total: sequence.len(),
            words_collected: cursor.ordinal,
            rounds_total: counters.total,
            rounds_productive: counters.productive,
            rounds_vain: counters.vain,
            rounds_failed: counters.failed,
            posts_skipped: counters.posts_skipped,
            persistence_writes: persisted.written,
            persistence_retries: persisted.retries,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Run rounds until no word is left to plan.
    ///
    /// The next round never starts before the previous one finished and the
    /// interval since its start elapsed.
    async fn round_loop(&self, ctx: &RoundContext, cursor: &mut CollectionCursor) -> RoundCounters {
        let interval = self.config.round_interval();
        let mut counters = RoundCounters::default();

        while let RoundPlan::Search(round) = plan_round(cursor, &ctx.sequence, &ctx.config) {
            let round_start = tokio::time::Instant::now();
            let task = tokio::spawn(run_round(ctx.clone(), cursor.clone(), round));

            tokio::time::sleep_until(round_start + interval).await;

            let result = match task.await {
                Ok(result) => result,
                Err(e) => Err(RoundError::Task(e.to_string())),
            };
            counters.total += 1;

            match result {
                Ok(report) => {
                    counters.posts_skipped += report.skipped_posts as u64;
                    match report.outcome {
                        RoundOutcome::Productive => counters.productive += 1,
                        RoundOutcome::Vain => counters.vain += 1,
                    }
                    debug!(
                        matched = report.matched,
                        outcome = report.outcome.as_str(),
                        vain = report.cursor.vain_count,
                        hashtag_mode = report.cursor.hashtag_mode_enabled,
                        "Round finished"
                    );
                    *cursor = report.cursor;
                }
                Err(e) => {
                    counters.failed += 1;
                    metrics::ROUNDS.with_label_values(&["failed"]).inc();
                    warn!(index = cursor.next_index(), "Round failed: {}", e);
                }
            }
        }

        counters
    }
}

/// Search and resolve one planned round on a copy of the cursor.
async fn run_round(
    ctx: RoundContext,
    mut cursor: CollectionCursor,
    round: SearchRound,
) -> Result<RoundReport, RoundError> {
    let start = Instant::now();

    debug!(query = %round.request.query, words = round.words.len(), "Searching");
    let posts = ctx.searcher.search(&round.request).await?;
    metrics::POSTS_FETCHED.observe(posts.len() as f64);

    let total = ctx.sequence.len();
    let resolution = resolve_round(&mut cursor, &round.words, &posts, |record| {
        ctx.persistence.enqueue(record.payload.clone());
        info!(
            ordinal = record.position + 1,
            index = record.position,
            word = %record.word,
            post_id = record.post_id,
            "Collected word {} of {}",
            record.position + 1,
            total
        );
    });

    let matched = resolution.matched();
    let outcome = cursor.record_round(matched, &ctx.config);

    metrics::WORDS_COLLECTED.inc_by(matched as u64);
    metrics::POSTS_SKIPPED.inc_by(resolution.skipped_posts as u64);
    metrics::ROUNDS.with_label_values(&[outcome.as_str()]).inc();
    metrics::ROUND_DURATION
        .with_label_values(&[outcome.as_str()])
        .observe(start.elapsed().as_secs_f64());

    Ok(RoundReport {
        cursor,
        outcome,
        matched,
        skipped_posts: resolution.skipped_posts,
    })
}
