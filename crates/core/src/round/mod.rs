//! A single collection round: cursor state, planning and match resolution.

mod cursor;
mod planner;
mod resolver;

pub use cursor::{CollectionCursor, Floor, RoundOutcome};
pub use planner::{build_query, plan_round, RoundPlan, SearchRound};
pub use resolver::{resolve_round, MatchRecord, Resolution};
