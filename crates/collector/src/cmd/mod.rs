//! Subcommand implementations.

pub mod collect;
pub mod ingest;
pub mod show;
pub mod token;
