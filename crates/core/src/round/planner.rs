//! Chooses the words searched in the next round and phrases the query.

use crate::orchestrator::CollectorConfig;
use crate::searcher::SearchRequest;
use crate::words::{Word, WordSequence};

use super::CollectionCursor;

/// Words and query for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRound {
    /// Words in sequence order, duplicates included.
    pub words: Vec<Word>,
    /// Distinct canonical forms of `words`, in first-seen order.
    pub terms: Vec<String>,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundPlan {
    Search(SearchRound),
    AllWordsCollected,
}

/// Plan the next round from the cursor.
///
/// The first unmatched word is always searched. Outside focus mode the
/// following words are added until `words_per_round` distinct terms are
/// queued or the sequence ends.
pub fn plan_round(
    cursor: &CollectionCursor,
    sequence: &WordSequence,
    config: &CollectorConfig,
) -> RoundPlan {
    let mut index = cursor.next_index();
    let Some(primary) = sequence.get(index) else {
        return RoundPlan::AllWordsCollected;
    };

    let mut words = Vec::new();
    let mut terms = Vec::new();
    push_word(&mut words, &mut terms, primary);

    if !cursor.is_focus_mode(config) {
        let last = sequence.len() - 1;
        while index < last && terms.len() < config.words_per_round {
            index += 1;
            if let Some(word) = sequence.get(index) {
                push_word(&mut words, &mut terms, word);
            }
        }
    }

    let query = build_query(&terms, cursor.hashtag_mode_enabled, &config.priority_hashtag);
    let request = SearchRequest::recent(query, config.items_per_request)
        .with_since_id(cursor.last_matched_id);

    RoundPlan::Search(SearchRound {
        words,
        terms,
        request,
    })
}

fn push_word(words: &mut Vec<Word>, terms: &mut Vec<String>, word: &Word) {
    words.push(word.clone());
    let canonical = word.canonical();
    if !terms.contains(&canonical) {
        terms.push(canonical);
    }
}

/// Join terms into an OR-query, tagging each term in hashtag mode.
pub fn build_query(terms: &[String], hashtag_mode: bool, hashtag: &str) -> String {
    if hashtag_mode {
        terms
            .iter()
            .map(|t| format!("{} {}", t, hashtag))
            .collect::<Vec<_>>()
            .join(" OR ")
    } else {
        terms.join(" OR ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sequence() -> WordSequence {
        WordSequence::from_tokens(["Ground", "control", "to", "major", "Tom"])
    }

    fn search(plan: RoundPlan) -> SearchRound {
        match plan {
            RoundPlan::Search(round) => round,
            RoundPlan::AllWordsCollected => panic!("expected a search round"),
        }
    }

    fn texts(round: &SearchRound) -> Vec<&str> {
        round.words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_first_round_with_hashtag() {
        let config = CollectorConfig::default();
        let cursor = CollectionCursor::new(Utc::now());

        let round = search(plan_round(&cursor, &sequence(), &config));
        assert_eq!(texts(&round), vec!["Ground", "control", "to"]);
        assert_eq!(
            round.request.query,
            "ground #singwithbowie OR control #singwithbowie OR to #singwithbowie"
        );
        assert_eq!(round.request.count, 100);
        assert_eq!(round.request.since_id, None);
    }

    #[test]
    fn test_query_without_hashtag_uses_since_id() {
        let config = CollectorConfig::default();
        let mut cursor = CollectionCursor::new(Utc::now());
        cursor.record_match(900, Utc::now(), Utc::now());
        cursor.hashtag_mode_enabled = false;

        let round = search(plan_round(&cursor, &sequence(), &config));
        assert_eq!(texts(&round), vec!["control", "to", "major"]);
        assert_eq!(round.request.query, "control OR to OR major");
        assert_eq!(round.request.since_id, Some(900));
    }

    #[test]
    fn test_duplicates_extend_the_batch() {
        let config = CollectorConfig::default();
        let cursor = CollectionCursor::new(Utc::now());
        let seq = WordSequence::from_tokens(["la", "La", "lá", "di", "da", "dum"]);

        let round = search(plan_round(&cursor, &seq, &config));
        assert_eq!(texts(&round), vec!["la", "La", "lá", "di", "da"]);
        assert_eq!(round.terms, vec!["la", "di", "da"]);
    }

    #[test]
    fn test_batch_stops_at_sequence_end() {
        let config = CollectorConfig::default();
        let mut cursor = CollectionCursor::new(Utc::now());
        for id in 1..=3 {
            cursor.record_match(id, Utc::now(), Utc::now());
        }

        let round = search(plan_round(&cursor, &sequence(), &config));
        assert_eq!(texts(&round), vec!["major", "Tom"]);
    }

    #[test]
    fn test_focus_mode_searches_one_word() {
        let config = CollectorConfig::default();
        let mut cursor = CollectionCursor::new(Utc::now());
        for _ in 0..config.vain_rounds_until_focus {
            cursor.record_round(0, &config);
        }

        let round = search(plan_round(&cursor, &sequence(), &config));
        assert_eq!(texts(&round), vec!["Ground"]);
        assert_eq!(round.request.query, "ground");
    }

    #[test]
    fn test_all_words_collected() {
        let config = CollectorConfig::default();
        let mut cursor = CollectionCursor::new(Utc::now());
        for id in 1..=5 {
            cursor.record_match(id, Utc::now(), Utc::now());
        }
        assert_eq!(
            plan_round(&cursor, &sequence(), &config),
            RoundPlan::AllWordsCollected
        );
    }

    #[test]
    fn test_build_query() {
        let terms = vec!["a".to_string(), "b".to_string()];
        assert_eq!(build_query(&terms, false, "#x"), "a OR b");
        assert_eq!(build_query(&terms, true, "#x"), "a #x OR b #x");
    }
}
