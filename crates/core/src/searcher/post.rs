//! Raw post records as returned by the search service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Creation time format used by the search service: `Wed Aug 27 13:08:45 +0000 2008`.
pub const POST_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Errors raised when a post lacks data needed for matching or persistence.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("post is missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid post time {value:?}: {reason}")]
    InvalidTime { value: String, reason: String },

    #[error("cannot serialize post: {0}")]
    Serialization(String),

    #[error("post could not be decoded: {0}")]
    Malformed(String),
}

/// Parse a post's `created_at` value.
pub fn parse_post_time(value: &str) -> Result<DateTime<Utc>, ExtractionError> {
    DateTime::parse_from_str(value, POST_TIME_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ExtractionError::InvalidTime {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Post author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hashtag entity, stored without the leading `#`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hashtag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entities attached to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostEntities {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hashtags: Vec<Hashtag>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A post exactly as the provider returned it.
///
/// Fields the matcher relies on are named; everything else is kept in `extra`
/// so the persisted payload matches the original.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PostAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<PostEntities>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Set when the provider's JSON did not fit the named fields.
    #[serde(skip)]
    pub malformed: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RawPost {
    /// Decode a single post from the provider.
    ///
    /// Never fails: a post whose fields have the wrong shape is kept with all
    /// of its JSON in `extra` and `malformed` set, so the matcher can skip it
    /// without losing the rest of the page.
    pub fn decode(value: Value) -> Self {
        match serde_json::from_value::<RawPost>(value.clone()) {
            Ok(post) => post,
            Err(e) => Self {
                extra: match value {
                    Value::Object(map) => map,
                    other => Map::from_iter([("value".to_string(), other)]),
                },
                malformed: Some(e.to_string()),
                ..Self::default()
            },
        }
    }

    /// Fails with [`ExtractionError::Malformed`] if the post did not decode.
    pub fn check_decoded(&self) -> Result<(), ExtractionError> {
        match &self.malformed {
            Some(reason) => Err(ExtractionError::Malformed(reason.clone())),
            None => Ok(()),
        }
    }

    pub fn post_id(&self) -> Result<u64, ExtractionError> {
        self.id
            .or_else(|| self.id_str.as_deref().and_then(|s| s.parse().ok()))
            .ok_or(ExtractionError::MissingField("id"))
    }

    pub fn created_time(&self) -> Result<DateTime<Utc>, ExtractionError> {
        let raw = self
            .created_at
            .as_deref()
            .ok_or(ExtractionError::MissingField("created_at"))?;
        parse_post_time(raw)
    }

    pub fn body(&self) -> Result<&str, ExtractionError> {
        self.text
            .as_deref()
            .ok_or(ExtractionError::MissingField("text"))
    }

    pub fn author_handle(&self) -> Option<&str> {
        self.user.as_ref()?.screen_name.as_deref()
    }

    pub fn hashtags(&self) -> Vec<&str> {
        self.entities
            .as_ref()
            .map(|e| e.hashtags.iter().filter_map(|h| h.text.as_deref()).collect())
            .unwrap_or_default()
    }

    /// Public URL of the post.
    pub fn permalink(&self) -> Result<String, ExtractionError> {
        let handle = self
            .author_handle()
            .ok_or(ExtractionError::MissingField("user.screen_name"))?;
        let id = match &self.id_str {
            Some(id) => id.clone(),
            None => self.post_id()?.to_string(),
        };
        Ok(format!("https://twitter.com/{}/status/{}", handle, id))
    }

    /// Serialized JSON stored in a collection.
    pub fn to_payload(&self) -> Result<String, ExtractionError> {
        serde_json::to_string(self).map_err(|e| ExtractionError::Serialization(e.to_string()))
    }

    pub fn from_payload(payload: &str) -> Result<Self, ExtractionError> {
        serde_json::from_str(payload).map_err(|e| ExtractionError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = r##"{
        "id": 1050118621198921728,
        "id_str": "1050118621198921728",
        "created_at": "Wed Oct 10 20:19:24 +0000 2018",
        "text": "Ground control to @major_tom #SingWithBowie",
        "user": {"screen_name": "starman", "followers_count": 12},
        "entities": {"hashtags": [{"text": "SingWithBowie", "indices": [29, 43]}], "urls": []},
        "lang": "en"
    }"##;

    #[test]
    fn test_parse_post_time() {
        let time = parse_post_time("Wed Aug 27 13:08:45 +0000 2008").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2008, 8, 27, 13, 8, 45).unwrap());
    }

    #[test]
    fn test_parse_post_time_rejects_other_formats() {
        let err = parse_post_time("2008-08-27 13:08:45").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidTime { .. }));
    }

    #[test]
    fn test_named_fields() {
        let post: RawPost = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(post.post_id().unwrap(), 1050118621198921728);
        assert_eq!(
            post.created_time().unwrap(),
            Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap()
        );
        assert_eq!(post.author_handle(), Some("starman"));
        assert_eq!(post.hashtags(), vec!["SingWithBowie"]);
        assert_eq!(
            post.permalink().unwrap(),
            "https://twitter.com/starman/status/1050118621198921728"
        );
    }

    #[test]
    fn test_payload_keeps_unknown_fields() {
        let post: RawPost = serde_json::from_str(SAMPLE).unwrap();
        let payload: Value = serde_json::from_str(&post.to_payload().unwrap()).unwrap();

        assert_eq!(payload["lang"], "en");
        assert_eq!(payload["user"]["followers_count"], 12);
        assert_eq!(payload["entities"]["hashtags"][0]["indices"][1], 43);
    }

    #[test]
    fn test_missing_fields_are_typed_errors() {
        let post = RawPost::default();
        assert!(matches!(
            post.post_id(),
            Err(ExtractionError::MissingField("id"))
        ));
        assert!(matches!(
            post.created_time(),
            Err(ExtractionError::MissingField("created_at"))
        ));
        assert!(matches!(post.body(), Err(ExtractionError::MissingField("text"))));
        assert!(post.hashtags().is_empty());
    }

    #[test]
    fn test_id_falls_back_to_id_str() {
        let post = RawPost {
            id_str: Some("77".to_string()),
            ..Default::default()
        };
        assert_eq!(post.post_id().unwrap(), 77);
    }

    #[test]
    fn test_hashtags_tolerate_null_and_missing_text() {
        let post: RawPost = serde_json::from_str(
            r#"{"id": 3, "entities": {"hashtags": [{"indices": [0, 3]}, {"text": "tom"}]}}"#,
        )
        .unwrap();
        assert_eq!(post.hashtags(), vec!["tom"]);

        let post: RawPost =
            serde_json::from_str(r#"{"id": 4, "entities": {"hashtags": null}}"#).unwrap();
        assert!(post.hashtags().is_empty());
    }

    #[test]
    fn test_decode_keeps_badly_typed_post_as_malformed() {
        let value: Value = serde_json::from_str(
            r#"{"id": "not-a-number", "created_at": 12, "text": "ground", "lang": "en"}"#,
        )
        .unwrap();
        let post = RawPost::decode(value);

        assert!(post.malformed.is_some());
        assert!(matches!(
            post.check_decoded(),
            Err(ExtractionError::Malformed(_))
        ));
        assert_eq!(post.extra["lang"], "en");
    }

    #[test]
    fn test_decode_valid_post() {
        let post = RawPost::decode(serde_json::from_str(SAMPLE).unwrap());
        assert!(post.check_decoded().is_ok());
        assert_eq!(post.post_id().unwrap(), 1050118621198921728);
    }
}
