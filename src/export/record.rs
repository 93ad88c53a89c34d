//! Validated metadata records and the normalization boundary.

use chrono::DateTime;
use chrono_tz::US::Eastern;
use serde_json::Value;

use crate::api::types::RawVideo;
use crate::error::{Error, Result};

/// CSV column names, in declared order.
pub const FIELD_NAMES: [&str; 12] = [
    "uri",
    "name",
    "description",
    "link",
    "duration",
    "created_time",
    "release_time",
    "view_privacy",
    "download_privacy",
    "tags",
    "play_stats",
    "status",
];

/// One validated catalog item. Immutable after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub uri: String,
    pub name: String,
    /// The only field allowed to be absent.
    pub description: Option<String>,
    pub link: String,
    pub duration: u64,
    pub created_time: String,
    pub release_time: String,
    pub view_privacy: String,
    pub download_privacy: String,
    /// Tag names joined by commas.
    pub tags: String,
    pub play_stats: u64,
    pub status: String,
    /// `created_time` converted from UTC to US/Eastern, formatted `YYYYMMDD`.
    /// Matches the upload_date the download tool uses in its output template.
    pub upload_date: String,
}

impl MetadataRecord {
    /// Last path segment of `uri`, e.g. `/videos/12345` -> `12345`.
    pub fn id(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or(&self.uri)
    }

    /// Render the record as one CSV row, in [`FIELD_NAMES`] order.
    pub fn to_row(&self) -> [String; 12] {
        [
            self.uri.clone(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
            self.link.clone(),
            self.duration.to_string(),
            self.created_time.clone(),
            self.release_time.clone(),
            self.view_privacy.clone(),
            self.download_privacy.clone(),
            self.tags.clone(),
            self.play_stats.to_string(),
            self.status.clone(),
        ]
    }
}

/// Normalize one raw catalog entry into a validated record.
///
/// Every field except `description` must come out scalar; a nested structure
/// anywhere fails the whole record with the offending field named.
pub fn normalize(raw: &RawVideo) -> Result<MetadataRecord> {
    let created_time = scalar_string("created_time", &raw.created_time)?;
    let upload_date = upload_date_from(&created_time)?;

    let tags = raw
        .tags
        .iter()
        .map(|t| scalar_string("tags", &t.name))
        .collect::<Result<Vec<_>>>()?
        .join(",");

    Ok(MetadataRecord {
        uri: scalar_string("uri", &raw.uri)?,
        name: scalar_string("name", &raw.name)?,
        description: match &raw.description {
            None | Some(Value::Null) => None,
            Some(value) => Some(scalar_string("description", value)?),
        },
        link: scalar_string("link", &raw.link)?,
        duration: scalar_u64("duration", &raw.duration)?,
        created_time,
        release_time: scalar_string("release_time", &raw.release_time)?,
        view_privacy: scalar_string("view_privacy", &raw.privacy.view)?,
        download_privacy: scalar_string("download_privacy", &raw.privacy.download)?,
        tags,
        play_stats: scalar_u64("play_stats", &raw.stats.plays)?,
        status: scalar_string("status", &raw.status)?,
        upload_date,
    })
}

/// Convert an RFC 3339 UTC timestamp to a `YYYYMMDD` date in US/Eastern.
///
/// The catalog reports `created_time` in UTC, but the download tool's
/// upload_date is in the service's local time, which is New York.
fn upload_date_from(created_time: &str) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(created_time).map_err(|e| Error::Validation {
        field: "created_time".to_string(),
        message: format!("not an RFC 3339 timestamp ({}): {}", e, created_time),
    })?;
    Ok(parsed.with_timezone(&Eastern).format("%Y%m%d").to_string())
}

fn scalar_string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(non_scalar(field, other)),
    }
}

fn scalar_u64(field: &str, value: &Value) -> Result<u64> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| Error::Validation {
            field: field.to_string(),
            message: format!("not a non-negative integer: {}", n),
        }),
        other => Err(non_scalar(field, other)),
    }
}

fn non_scalar(field: &str, value: &Value) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: value.to_string(),
    }
}
