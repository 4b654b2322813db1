use chrono::{DateTime, Utc};

use crate::orchestrator::CollectorConfig;

/// Lower bound a post must exceed to be eligible as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Floor {
    /// Post identifier of the last match.
    Id(u64),
    /// Posts created after this instant, used until the first match.
    Time(DateTime<Utc>),
}

impl Floor {
    pub fn admits(&self, post_id: u64, post_time: DateTime<Utc>) -> bool {
        match *self {
            Floor::Id(id) => post_id > id,
            Floor::Time(time) => post_time > time,
        }
    }
}

/// Whether a finished round matched anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Productive,
    Vain,
}

impl RoundOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Productive => "productive",
            RoundOutcome::Vain => "vain",
        }
    }
}

/// Collection progress of a run.
///
/// Owned by exactly one round at a time. `last_index` is `None` until the
/// first word has been matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionCursor {
    pub last_index: Option<usize>,
    /// Number of words matched so far.
    pub ordinal: usize,
    pub last_matched_id: Option<u64>,
    pub last_matched_time: Option<DateTime<Utc>>,
    /// Floor for the next word while no post has been matched yet.
    pub collect_window_start: DateTime<Utc>,
    pub vain_count: u32,
    pub productive_count: u32,
    pub hashtag_mode_enabled: bool,
}

impl CollectionCursor {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            last_index: None,
            ordinal: 0,
            last_matched_id: None,
            last_matched_time: None,
            collect_window_start: started_at,
            vain_count: 0,
            productive_count: 0,
            hashtag_mode_enabled: true,
        }
    }

    /// Position of the first word not yet matched.
    pub fn next_index(&self) -> usize {
        self.last_index.map_or(0, |i| i + 1)
    }

    pub fn floor(&self) -> Floor {
        match self.last_matched_id {
            Some(id) => Floor::Id(id),
            None => Floor::Time(self.collect_window_start),
        }
    }

    pub fn is_focus_mode(&self, config: &CollectorConfig) -> bool {
        self.vain_count >= config.vain_rounds_until_focus
    }

    /// Advance past the next word after it matched `post_id`.
    pub fn record_match(&mut self, post_id: u64, post_time: DateTime<Utc>, now: DateTime<Utc>) {
        self.last_index = Some(self.next_index());
        self.ordinal += 1;
        self.last_matched_id = Some(post_id);
        self.last_matched_time = Some(post_time);
        self.collect_window_start = now;
    }

    /// Apply the mode transitions for a finished round.
    pub fn record_round(&mut self, matched: usize, config: &CollectorConfig) -> RoundOutcome {
        if matched == 0 {
            self.vain_count += 1;
            self.productive_count = 0;
            if self.hashtag_mode_enabled && self.vain_count >= config.vain_hashtag_rounds_max {
                self.hashtag_mode_enabled = false;
            }
            RoundOutcome::Vain
        } else {
            self.productive_count += 1;
            self.vain_count = 0;
            self.hashtag_mode_enabled = true;
            RoundOutcome::Productive
        }
    }
}
