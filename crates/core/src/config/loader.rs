use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
///
/// Nested keys are split on a double underscore, so
/// `LYRICLINE_SEARCH__TWITTER__BEARER_TOKEN` overrides `search.twitter.bearer_token`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("LYRICLINE_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[store]
path = "/tmp/words.db"

[search.twitter]
bearer_token = "token"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.store.path.to_str().unwrap(), "/tmp/words.db");
        assert_eq!(config.search.twitter.bearer_token, "token");
    }

    #[test]
    fn test_load_config_from_str_invalid_type() {
        let toml = r#"
[collector]
words_per_round = "three"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/lyricline.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r##"
[collector]
priority_hashtag = "#testtag"
rate_window_secs = 60
rate_max_requests = 30
"##
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.collector.priority_hashtag, "#testtag");
        assert_eq!(config.collector.round_interval().as_secs(), 2);
    }
}
