use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single todo entry as stored in the backing file.
///
/// Todos are never edited in place: they are created by `add` and dropped by
/// `remove`, so every field is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(rename = "createdAt", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Fields written by other tools, carried through rewrites untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
            // The file keeps millisecond precision; match it so a saved todo
            // compares equal to itself once loaded back.
            created_at: Utc::now().trunc_subsecs(3),
            extra: Map::new(),
        }
    }

    /// Re-rolls the id until it differs from every id in `existing`.
    pub fn with_unique_id(mut self, existing: &[Todo]) -> Self {
        while existing.iter().any(|t| t.id == self.id) {
            self.id = generate_id();
        }
        self
    }
}

/// Lowercase hex, no hyphens: safe to type and to match with `[a-z0-9]+`.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// `createdAt` is written as `2023-01-01T00:00:00.000Z`.
///
/// On load it accepts RFC 3339, ISO-8601 without an offset (read as UTC), or
/// a number of milliseconds since the Unix epoch.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Text(String),
        Millis(i64),
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        match Stored::deserialize(d)? {
            Stored::Text(raw) => parse_text(&raw).map_err(D::Error::custom),
            Stored::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| D::Error::custom(format!("timestamp {ms} out of range"))),
        }
    }

    fn parse_text(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(err) => raw
                .parse::<NaiveDateTime>()
                .map(|naive| naive.and_utc())
                .map_err(|_| err),
        }
    }
}
