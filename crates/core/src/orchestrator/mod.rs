//! Collection orchestrator.
//!
//! The orchestrator owns the cursor for a whole run:
//! - **Init**: load words, clear `upcoming`, start the persistence writer
//! - **Running**: one round at a time, paced by the search rate budget
//! - **Done**: drain the writer, rotate collections

mod config;
mod runner;
mod types;

pub use config::CollectorConfig;
pub use runner::CollectionOrchestrator;
pub use types::{OrchestratorError, RoundError, RunPhase, RunSummary};
