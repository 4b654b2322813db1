//! Twitter standard search backend.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::TwitterConfig;

use super::{PostSearcher, RawPost, SearchError, SearchRequest};

const SEARCH_PATH: &str = "/1.1/search/tweets.json";
const TOKEN_PATH: &str = "/oauth2/token";

/// Search backend for the Twitter v1.1 standard search endpoint.
pub struct TwitterSearcher {
    client: Client,
    config: TwitterConfig,
}

impl TwitterSearcher {
    pub fn new(config: TwitterConfig) -> Result<Self, SearchError> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        endpoint(&self.config.api_url, SEARCH_PATH)
    }
}

#[async_trait]
impl PostSearcher for TwitterSearcher {
    fn name(&self) -> &str {
        "twitter"
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<RawPost>, SearchError> {
        let start = Instant::now();
        debug!(query = %request.query, since_id = ?request.since_id, "Searching Twitter");

        let response = self
            .client
            .get(self.search_url())
            .bearer_auth(&self.config.bearer_token)
            .query(&search_params(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let response = check_status(response).await?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let posts = decode_statuses(body.statuses);
        debug!(
            results = posts.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Twitter search complete"
        );

        Ok(posts)
    }
}

/// Exchange the application key and secret for an application-only bearer token.
pub async fn obtain_bearer_token(config: &TwitterConfig) -> Result<String, SearchError> {
    let (key, secret) = match (&config.app_key, &config.app_secret) {
        (Some(key), Some(secret)) => (key, secret),
        _ => {
            return Err(SearchError::Unauthorized(
                "app_key and app_secret are required to obtain a token".to_string(),
            ))
        }
    };

    let client = build_client(config)?;
    let response = client
        .post(endpoint(&config.api_url, TOKEN_PATH))
        .basic_auth(key, Some(secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(map_transport_error)?;

    let response = check_status(response).await?;
    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| SearchError::InvalidResponse(format!("Failed to parse token: {}", e)))?;

    if !token.token_type.eq_ignore_ascii_case("bearer") {
        return Err(SearchError::InvalidResponse(format!(
            "unexpected token type: {}",
            token.token_type
        )));
    }
    Ok(token.access_token)
}

fn build_client(config: &TwitterConfig) -> Result<Client, SearchError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs as u64))
        .build()
        .map_err(|e| SearchError::ConnectionFailed(format!("Failed to create HTTP client: {}", e)))
}

fn endpoint(api_url: &str, path: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), path)
}

fn search_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", request.query.clone()),
        ("result_type", request.result_type.as_str().to_string()),
        ("count", request.count.to_string()),
    ];
    if let Some(since_id) = request.since_id {
        params.push(("since_id", since_id.to_string()));
    }
    params
}

/// Each status is decoded on its own so one bad post cannot reject the page.
fn decode_statuses(statuses: Vec<Value>) -> Vec<RawPost> {
    statuses.into_iter().map(RawPost::decode).collect()
}

fn map_transport_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else if e.is_connect() {
        SearchError::ConnectionFailed(e.to_string())
    } else {
        SearchError::ApiError(e.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, SearchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(200).collect();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SearchError::Unauthorized(body),
        StatusCode::TOO_MANY_REQUESTS => SearchError::RateLimited,
        _ => SearchError::ApiError(format!("HTTP {}: {}", status, body)),
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    statuses: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token_type: String,
    access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            endpoint("https://api.twitter.com/", SEARCH_PATH),
            "https://api.twitter.com/1.1/search/tweets.json"
        );
    }

    #[test]
    fn test_search_params_without_since_id() {
        let request = SearchRequest::recent("ground #singwithbowie OR control #singwithbowie", 100);
        let params = search_params(&request);

        assert_eq!(
            params,
            vec![
                ("q", "ground #singwithbowie OR control #singwithbowie".to_string()),
                ("result_type", "recent".to_string()),
                ("count", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_params_with_since_id() {
        let request = SearchRequest::recent("major", 50).with_since_id(Some(1234));
        let params = search_params(&request);

        assert!(params.contains(&("since_id", "1234".to_string())));
        assert!(params.contains(&("count", "50".to_string())));
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "statuses": [
                {"id": 2, "created_at": "Wed Oct 10 20:19:24 +0000 2018", "text": "tom"}
            ],
            "search_metadata": {"count": 100}
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let posts = decode_statuses(response.statuses);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post_id().unwrap(), 2);
    }

    #[test]
    fn test_bad_status_does_not_reject_page() {
        let json = r#"{
            "statuses": [
                {"id": "x1", "created_at": "Wed Oct 10 20:19:24 +0000 2018", "text": "ground"},
                {"id": 5, "created_at": "Wed Oct 10 20:19:25 +0000 2018", "text": "ground",
                 "entities": {"hashtags": null}},
                {"id": 6, "created_at": "Wed Oct 10 20:19:26 +0000 2018", "text": "control",
                 "entities": {"hashtags": [{"indices": [0, 3]}]}}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let posts = decode_statuses(response.statuses);

        assert_eq!(posts.len(), 3);
        assert!(posts[0].check_decoded().is_err());
        assert_eq!(posts[1].post_id().unwrap(), 5);
        assert_eq!(posts[2].post_id().unwrap(), 6);
    }

    #[test]
    fn test_searcher_name() {
        let searcher = TwitterSearcher::new(TwitterConfig::default()).unwrap();
        assert_eq!(searcher.name(), "twitter");
    }

    #[tokio::test]
    async fn test_token_requires_credentials() {
        let err = obtain_bearer_token(&TwitterConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Unauthorized(_)));
    }
}
