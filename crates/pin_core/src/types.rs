use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;

/// Date used for articles that carry neither `created_at` nor `date`.
pub const UNDATED_EPOCH: (i32, u32, u32) = (2000, 1, 1);

/// One news item as published by the remote feed. Nothing here is validated:
/// every field is optional on the wire and scalar values of the wrong type are
/// turned into text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "required_text")]
    pub id: String,
    #[serde(default, deserialize_with = "required_text")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub kategori: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub nama_lengkap_santri: Option<String>,
}

impl Article {
    /// Shorthand used by tests and offline feeds.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// The raw date string shown to readers: `created_at`, then `date`.
    pub fn display_date(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.date.as_deref())
    }

    /// The instant used for ordering and age filtering.
    ///
    /// Undated articles fall back to 2000-01-01. `None` means a date is
    /// present but could not be parsed.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        match self.display_date() {
            Some(raw) => parse_feed_date(raw),
            None => Some(undated_epoch()),
        }
    }

    pub fn author_name(&self) -> Option<&str> {
        self.nama_lengkap_santri
            .as_deref()
            .or(self.author.as_deref())
    }

    /// The id read the way `parseInt` reads it: optional sign, leading digits,
    /// anything after is ignored.
    pub fn numeric_id(&self) -> Option<i64> {
        parse_leading_int(&self.id)
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.kategori
            .as_deref()
            .map(|k| k.trim().to_lowercase() == tag.trim().to_lowercase())
            .unwrap_or(false)
    }
}

/// The `{ data: Article[] }` envelope returned by the news API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedEnvelope {
    pub data: Vec<Article>,
}

impl FeedEnvelope {
    /// Parses a feed body. The body must be JSON; any other shape than an
    /// object holding a `data` array degrades to an empty list.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        let items = match value {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    tracing::warn!("feed envelope has no data array, treating as empty");
                    Vec::new()
                }
            },
            _ => {
                tracing::warn!("feed body is not an object, treating as empty");
                Vec::new()
            }
        };

        let mut data = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !item.is_object() {
                tracing::warn!("skipping feed entry {} that is not an object", index);
                continue;
            }
            match serde_json::from_value::<Article>(item) {
                Ok(article) => data.push(article),
                Err(e) => tracing::warn!("skipping feed entry {}: {}", index, e),
            }
        }

        Self { data }
    }
}

pub fn undated_epoch() -> DateTime<Utc> {
    let (y, m, d) = UNDATED_EPOCH;
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parses the date formats seen in the feed. Naive timestamps are taken as UTC.
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else { break };
        seen = true;
        value = value.saturating_mul(10).saturating_add(digit as i64);
    }

    seen.then(|| if negative { -value } else { value })
}

fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Option::<Value>::deserialize(deserializer)?))
}

fn required_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}
