//! Hand-off of matched posts to durable storage.
//!
//! Rounds enqueue payloads through a [`PersistenceHandle`]; a single
//! [`PersistenceWriter`] task appends them to the `upcoming` collection.

mod handle;
mod writer;

pub use handle::*;
pub use writer::*;
