//! API response type definitions.

use serde::Deserialize;
use serde_json::Value;

/// Account information from the user endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub metadata: UserMetadata,
}

/// Metadata block carried by the user endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMetadata {
    pub connections: UserConnections,
}

/// Connection listing on the user object.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConnections {
    pub videos: VideosConnection,
}

/// The videos connection: where the listing starts and how many items it has.
#[derive(Debug, Clone, Deserialize)]
pub struct VideosConnection {
    pub uri: String,
    pub total: u64,
}

/// One page of the paginated video listing.
#[derive(Debug, Clone, Deserialize)]
pub struct VideosPage {
    pub paging: Paging,
    #[serde(default)]
    pub data: Vec<RawVideo>,
}

/// Cursor links attached to a listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct Paging {
    pub next: Option<String>,
    pub first: Option<String>,
}

/// One raw catalog entry, before normalization.
///
/// Leaves that the normalizer must check for scalar-ness stay as
/// `serde_json::Value`; only the shape of the nesting is fixed here.
/// Every leaf defaults to `Value::Null` so an absent field reaches the
/// normalizer and fails validation there, with the field named, instead of
/// failing page deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    pub uri: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub link: Value,
    #[serde(default)]
    pub duration: Value,
    #[serde(default)]
    pub created_time: Value,
    #[serde(default)]
    pub release_time: Value,
    #[serde(default)]
    pub privacy: RawPrivacy,
    #[serde(default)]
    pub tags: Vec<RawTag>,
    #[serde(default)]
    pub stats: RawStats,
    #[serde(default)]
    pub status: Value,
}

/// Nested privacy object on a raw entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrivacy {
    #[serde(default)]
    pub view: Value,
    #[serde(default)]
    pub download: Value,
}

/// One tag object on a raw entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTag {
    #[serde(default)]
    pub name: Value,
}

/// Nested stats object on a raw entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    #[serde(default)]
    pub plays: Value,
}
