//! # Domain Models
//!
//! These structs represent the core entities of Rusty-Reviews.
//! Field names on the wire follow the seed dataset's column headers
//! (`ReviewId`, `ReviewBody`, ...), so the same types serve the CSV
//! loader and the HTTP layer.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire and seed format for review timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single customer review, the unit of storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub id: String,
    #[serde(rename = "ReviewBody")]
    pub body: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// Naive local time, matching how seed rows are recorded.
    #[serde(rename = "Timestamp", with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Review {
    /// Builds a freshly submitted review with a random id and the current local time.
    pub fn new(body: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new_at(body, location, Local::now().naive_local())
    }

    /// Same as [`Review::new`] with an explicit creation instant.
    pub fn new_at(
        body: impl Into<String>,
        location: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            body: body.into(),
            location: location.into(),
            timestamp,
        }
    }
}

/// Four-part sentiment breakdown of a piece of text.
///
/// `negative`, `neutral` and `positive` are proportions in `[0, 1]`;
/// `compound` is the normalized overall polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

/// A review paired with the sentiment computed for it on read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    #[serde(rename = "ReviewId")]
    pub id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp", with = "timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "ReviewBody")]
    pub body: String,
    pub sentiment: SentimentScores,
}

impl ScoredReview {
    pub fn new(review: &Review, sentiment: SentimentScores) -> Self {
        Self {
            id: review.id.clone(),
            location: review.location.clone(),
            timestamp: review.timestamp,
            body: review.body.clone(),
            sentiment,
        }
    }
}

/// Serde adapter for [`TIMESTAMP_FORMAT`] strings.
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Parses a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
    }
}
