//! Word sequences and the text rules used to match them.
//!
//! The same tokenizer builds the word list at ingestion time and scans every
//! fetched post, so both sides agree on what a "word" is.

mod fold;
mod sequence;
mod text;

pub use sequence::{Word, WordSequence, WordsError};
pub use text::{canonicalize, is_word_char, post_terms, strip_mentions_and_links, tokenize};
