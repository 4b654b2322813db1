use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Round batching and rate budget values are non-zero
/// - Page size fits the search provider's limit
/// - Priority hashtag is a hashtag
/// - Search API URL is set
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let collector = &config.collector;

    if collector.words_per_round == 0 {
        return Err(ConfigError::ValidationError(
            "collector.words_per_round cannot be 0".to_string(),
        ));
    }

    if collector.rate_max_requests == 0 || collector.rate_window_secs == 0 {
        return Err(ConfigError::ValidationError(
            "collector.rate_window_secs and collector.rate_max_requests must be positive"
                .to_string(),
        ));
    }

    if !(1..=100).contains(&collector.items_per_request) {
        return Err(ConfigError::ValidationError(format!(
            "collector.items_per_request must be within 1..=100, got {}",
            collector.items_per_request
        )));
    }

    if collector.priority_hashtag.len() < 2 || !collector.priority_hashtag.starts_with('#') {
        return Err(ConfigError::ValidationError(format!(
            "collector.priority_hashtag must look like '#tag', got {:?}",
            collector.priority_hashtag
        )));
    }

    if config.search.twitter.api_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "search.twitter.api_url cannot be empty".to_string(),
        ));
    }

    Ok(())
}
