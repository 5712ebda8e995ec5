//! Data models for radio-browser API responses
//!
//! Raw records (`StationRecord`, `CountRecord`) mirror the JSON the API
//! returns, with every field defaulted so a missing key never fails the
//! record. `Station` and `Directory` are the values handed to the
//! downstream menu layer.

use crate::error::{Error, Result};
use crate::ids;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Deserialize a string or number into a u32, defaulting empty strings to 0
fn deserialize_lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrU32 {
        String(String),
        Number(u32),
    }

    match StringOrU32::deserialize(deserializer)? {
        StringOrU32::String(s) if s.is_empty() => Ok(0),
        StringOrU32::String(s) => s.parse::<u32>().map_err(D::Error::custom),
        StringOrU32::Number(n) => Ok(n),
    }
}

// ============================================================================
// Raw API records
// ============================================================================

/// One station record as returned by the `stations*` endpoints
///
/// All fields are defaulted: a record missing a key maps to an empty
/// or zero value instead of failing the whole batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationRecord {
    #[serde(default)]
    pub stationuuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub favicon: String,
    /// Comma-joined tag list
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub countrycode: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub languagecodes: String,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub votes: u32,
    #[serde(default)]
    pub codec: String,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub bitrate: u32,
    /// 1 when the station passed the provider's last stream check
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub lastcheckok: u32,
}

/// One record from the `countries`, `languages` or `tags` endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub stationcount: u32,
}

// ============================================================================
// Station
// ============================================================================

/// A radio station as exposed to the downstream menu layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    /// Local station id (`<prefix>-<base64 UUID>`), the public-facing key
    pub id: String,
    /// Provider-native station UUID, opaque
    pub stationuuid: String,
    /// Station name (may be empty)
    pub name: String,
    /// Stream URL; refreshed in place by
    /// [`resolve_playable_url`](crate::RadioBrowserClient::resolve_playable_url)
    pub url: String,
    /// Favicon URL (may be empty)
    pub icon: String,
    /// Tags in provider order; an empty source field yields `[""]`
    pub tags: Vec<String>,
    pub countrycode: String,
    pub language: String,
    pub languagecodes: String,
    /// Vote count, verbatim from the provider
    pub votes: u32,
    pub codec: String,
    /// Bitrate in kbps, verbatim from the provider
    pub bitrate: u32,
}

impl Station {
    /// Build a station from a raw record
    ///
    /// The local id is derived deterministically from `stationuuid`, so
    /// the same record always produces the same id. Fails only when the
    /// provider UUID itself does not parse.
    pub fn from_record(record: StationRecord, prefix: &str) -> Result<Self> {
        let uuid = Uuid::parse_str(&record.stationuuid)
            .map_err(|_| Error::InvalidStationId(record.stationuuid.clone()))?;

        Ok(Self {
            id: ids::encode_station_id(&uuid, prefix),
            stationuuid: record.stationuuid,
            name: record.name,
            url: record.url,
            icon: record.favicon,
            tags: record.tags.split(',').map(str::to_string).collect(),
            countrycode: record.countrycode,
            language: record.language,
            languagecodes: record.languagecodes,
            votes: record.votes,
            codec: record.codec,
            bitrate: record.bitrate,
        })
    }

    /// Tags joined back into the provider's comma-separated form
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// First tag, used as the primary genre by the menu layer
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or("")
    }
}

// ============================================================================
// Directory
// ============================================================================

/// A named, counted grouping (country, language or genre) used for
/// browse navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Directory {
    /// Provider name, used as the query value when drilling down
    pub name: String,
    /// Number of stations in this grouping
    pub station_count: u32,
    /// Optional human-facing name; falls back to `name`
    pub display_name: Option<String>,
}

impl Directory {
    /// Create a directory displayed under its provider name
    pub fn new(name: impl Into<String>, station_count: u32) -> Self {
        Self {
            name: name.into(),
            station_count,
            display_name: None,
        }
    }

    /// Create a directory with a distinct display name
    pub fn with_display_name(
        name: impl Into<String>,
        station_count: u32,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            station_count,
            display_name: Some(display_name.into()),
        }
    }

    /// The name to render in menus
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

// ============================================================================
// Casing helpers for directory display names
// ============================================================================

/// Title-case every word (`"norwegian bokmål"` → `"Norwegian Bokmål"`)
pub(crate) fn title_case(s: &str) -> String {
    s.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, lowercase the rest
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
