//! Wire types for the playlist API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Access/refresh token pair issued by `POST /token` and `POST /token/refresh`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Account record from `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A playlist with its ordered channels.
///
/// The server is the source of truth; the client only caches the copy it
/// fetched for the active view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub epg_url: Option<String>,
    #[serde(default, deserialize_with = "flag_from_int_or_bool")]
    pub is_custom: bool,
    #[serde(default)]
    pub public_token: Option<String>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Playlist {
    /// Channels in display order. The server orders by position, but a
    /// freshly reordered copy may arrive interleaved.
    pub fn channels_in_order(&self) -> Vec<&Channel> {
        let mut channels: Vec<&Channel> = self.channels.iter().collect();
        channels.sort_by_key(|c| (c.position.unwrap_or(u32::MAX), c.id));
        channels
    }
}

/// A single channel entry within a playlist.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub playlist_id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub group_title: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub tvg_id: Option<String>,
    /// 1-based order within the playlist.
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "extra_tags_from_map_or_text")]
    pub extra_tags: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /playlists`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPlaylist {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epg_url: Option<String>,
    pub is_custom: bool,
}

/// Partial-update payload for `PUT /playlists/{id}`. Absent fields are
/// left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlaylistPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epg_url: Option<String>,
}

/// Payload for `POST /playlists/{id}/channels`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewChannel {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_id: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_tags: BTreeMap<String, String>,
}

/// Partial-update payload for `PUT /channels/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChannelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_tags: Option<BTreeMap<String, String>>,
}

/// One reorder instruction for `PUT /playlists/{id}/channels/reorder`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelOrder {
    pub id: i64,
    pub position: u32,
}

/// Response of `POST /playlists/{id}/generate-token`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublicLink {
    pub token: String,
    pub public_url: String,
    #[serde(default)]
    pub epg_url: Option<String>,
}

/// Response of `POST /playlists/{id}/sync`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SyncOutcome {
    pub message: String,
    #[serde(default)]
    pub channels_count: Option<u32>,
}

/// Bare `{"message": ...}` acknowledgment returned by delete and reorder
/// endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// The server stores `extra_tags` in a TEXT column and returns the raw
/// JSON-encoded string inside channel objects, while accepting a real JSON
/// object on write. Accept both shapes; unparseable text degrades to empty.
fn extra_tags_from_map_or_text<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Map(BTreeMap<String, String>),
        Text(String),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Map(map) => map,
        Raw::Text(text) => serde_json::from_str(&text).unwrap_or_default(),
        Raw::Null => BTreeMap::new(),
    })
}

/// Parse the timestamp shapes the server actually produces: RFC 3339,
/// naive ISO 8601 (FastAPI's datetime serialization), or SQLite's
/// `YYYY-MM-DD HH:MM:SS`. Naive times are taken as UTC.
pub fn parse_server_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = raw.parse::<NaiveDateTime>() {
        return Some(t.and_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|t| t.and_utc())
}

/// Timestamps are display-only; an unparseable one degrades to absent
/// rather than failing the whole entity.
fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_server_datetime))
}

/// SQLite booleans arrive as 0/1.
fn flag_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => b,
        Raw::Int(n) => n != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extra_tags_from_object() {
        let channel: Channel = serde_json::from_str(
            r#"{
                "id": 1,
                "playlist_id": 2,
                "name": "News 24",
                "url": "http://example.com/stream",
                "extra_tags": {"tvg-shift": "+1"}
            }"#,
        )
        .unwrap();
        assert_eq!(channel.extra_tags.get("tvg-shift").map(String::as_str), Some("+1"));
    }

    #[test]
    fn test_channel_extra_tags_from_encoded_text() {
        let channel: Channel = serde_json::from_str(
            r#"{
                "id": 1,
                "playlist_id": 2,
                "name": "News 24",
                "url": "http://example.com/stream",
                "extra_tags": "{\"tvg-shift\": \"+1\"}"
            }"#,
        )
        .unwrap();
        assert_eq!(channel.extra_tags.get("tvg-shift").map(String::as_str), Some("+1"));
    }

    #[test]
    fn test_channel_extra_tags_unparseable_text_degrades_to_empty() {
        let channel: Channel = serde_json::from_str(
            r#"{
                "id": 1,
                "playlist_id": 2,
                "name": "News 24",
                "url": "http://example.com/stream",
                "extra_tags": "not json"
            }"#,
        )
        .unwrap();
        assert!(channel.extra_tags.is_empty());
    }

    #[test]
    fn test_playlist_is_custom_from_sqlite_int() {
        let playlist: Playlist = serde_json::from_str(
            r#"{
                "id": 1,
                "user_id": 1,
                "name": "Favorites",
                "is_custom": 1,
                "created_at": null
            }"#,
        )
        .unwrap();
        assert!(playlist.is_custom);
        assert!(playlist.channels.is_empty());
    }

    #[test]
    fn test_playlist_channels_in_order_sorts_by_position() {
        let playlist: Playlist = serde_json::from_str(
            r#"{
                "id": 1,
                "user_id": 1,
                "name": "Main",
                "is_custom": false,
                "created_at": null,
                "channels": [
                    {"id": 10, "playlist_id": 1, "name": "b", "url": "http://b", "position": 2},
                    {"id": 11, "playlist_id": 1, "name": "a", "url": "http://a", "position": 1}
                ]
            }"#,
        )
        .unwrap();
        let ordered: Vec<i64> = playlist.channels_in_order().iter().map(|c| c.id).collect();
        assert_eq!(ordered, vec![11, 10]);
    }

    #[test]
    fn test_parse_server_datetime_accepts_the_wire_shapes() {
        for raw in [
            "2024-03-01T10:30:00Z",
            "2024-03-01T10:30:00",
            "2024-03-01 10:30:00",
        ] {
            let parsed = parse_server_datetime(raw).unwrap();
            assert_eq!(parsed.timestamp(), 1_709_289_000, "failed for {raw}");
        }
        assert!(parse_server_datetime("last tuesday").is_none());
    }

    #[test]
    fn test_unparseable_timestamp_degrades_to_absent() {
        let playlist: Playlist = serde_json::from_str(
            r#"{
                "id": 1,
                "user_id": 1,
                "name": "Main",
                "is_custom": false,
                "created_at": "whenever",
                "last_sync": "2024-03-01 10:30:00"
            }"#,
        )
        .unwrap();
        assert!(playlist.created_at.is_none());
        assert!(playlist.last_sync.is_some());
    }

    #[test]
    fn test_playlist_patch_skips_absent_fields() {
        let patch = PlaylistPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"name":"Renamed"}"#);
    }
}
