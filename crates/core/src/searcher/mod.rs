//! Post search abstraction.
//!
//! This module provides a `PostSearcher` trait for querying a live post
//! search service, the raw post record it returns, and a Twitter backend.

mod post;
mod twitter;
mod types;

pub use post::{
    parse_post_time, ExtractionError, Hashtag, PostAuthor, PostEntities, RawPost, POST_TIME_FORMAT,
};
pub use twitter::{obtain_bearer_token, TwitterSearcher};
pub use types::*;
