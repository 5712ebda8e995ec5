//! HTTP client for the radio-browser.info directory API
//!
//! This module provides the client used to browse the public
//! radio-browser station directory: countries, languages and genres,
//! vote-ranked listings, free-text search and point lookups by local
//! station id.
//!
//! # Example
//!
//! ```no_run
//! use tdbrowser::RadioBrowserClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RadioBrowserClient::new()?;
//!
//!     let countries = client.country_directories().await?;
//!     println!("{} browsable countries", countries.len());
//!
//!     let stations = client.stations_by_country("Germany").await?;
//!     for station in stations.iter().take(5) {
//!         println!("{} ({} kbps {})", station.name, station.bitrate, station.codec);
//!     }
//!     Ok(())
//! }
//! ```

use crate::cache::StationCache;
use crate::error::{Error, Result};
use crate::filter::{AcceptAll, StationFilter, VisibilityFilter};
use crate::ids;
use crate::models::{capitalize, title_case, CountRecord, Directory, Station, StationRecord};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default radio-browser API base URL
pub const DEFAULT_BASE_URL: &str = "http://all.api.radio-browser.info";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("TuneDial/", env!("CARGO_PKG_VERSION"));

/// Default prefix for local station ids
pub const DEFAULT_ID_PREFIX: &str = "RB";

/// Default cap for vote-ranked listings and searches
pub const DEFAULT_STATION_LIMIT: u32 = 200;

/// Minimum station count for a country to be browsable (strict `>`)
pub const MINIMUM_COUNT_COUNTRY: u32 = 5;

/// Minimum station count for a language to be browsable (strict `>`)
pub const MINIMUM_COUNT_LANGUAGE: u32 = 5;

/// Minimum station count for a genre to be browsable (strict `>`)
pub const MINIMUM_COUNT_GENRE: u32 = 5;

/// radio-browser directory client
///
/// Every listing operation clears and repopulates the internal station
/// cache, so the menu layer can follow up with
/// [`station_by_id`](Self::station_by_id) without a second round trip.
/// Requests are fire-once: no retries, no backoff.
///
/// The client is cheap to clone; clones share the HTTP connection pool
/// and the station cache.
#[derive(Clone)]
pub struct RadioBrowserClient {
    pub(crate) client: Client,
    base_url: String,
    timeout: Duration,
    id_prefix: String,
    default_limit: u32,
    min_count_country: u32,
    min_count_language: u32,
    min_count_genre: u32,
    show_broken: bool,
    filter: Arc<dyn StationFilter>,
    cache: Arc<StationCache>,
}

impl RadioBrowserClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the local id prefix
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Access the station cache shared by this client and its clones
    pub fn cache(&self) -> &StationCache {
        &self.cache
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Perform one GET against `<base>/json/<path>` and decode the body
    ///
    /// Single attempt. A non-success status maps to [`Error::Api`],
    /// transport failures to [`Error::Http`].
    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        let mut url = Url::parse(&format!("{}/json/{}", self.base_url, path))?;
        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }

        tracing::debug!("radio-browser API request: {}", url);

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Decode a response body as an array of records
    ///
    /// Elements are kept as raw values so one malformed record can be
    /// skipped without aborting the batch.
    fn as_array(value: serde_json::Value) -> Result<Vec<serde_json::Value>> {
        Ok(serde_json::from_value(value)?)
    }

    // ========================================================================
    // Point lookup
    // ========================================================================

    /// Look up a station by its local id
    ///
    /// The id is decoded back to the provider UUID first; a malformed id
    /// fails with [`Error::InvalidStationId`]. A cache hit is returned
    /// directly, otherwise the `byuuid` endpoint is queried and the
    /// result cached. `Ok(None)` means the provider knows no such
    /// station.
    pub async fn station_by_id(&self, id: &str) -> Result<Option<Station>> {
        let uuid = ids::decode_station_id(id)?;

        if let Some(station) = self.cache.get(id) {
            // Advisory only; the id is the key, the uuid just confirms it
            tracing::debug!("cache hit {}: {} == {}", id, station.stationuuid, uuid);
            return Ok(Some(station));
        }

        let value = self
            .get_json("stations/byuuid", &[("uuids", &uuid.to_string())])
            .await?;

        let Some(first) = Self::as_array(value)?.into_iter().next() else {
            return Ok(None);
        };

        let record: StationRecord = serde_json::from_value(first)?;
        let station = Station::from_record(record, &self.id_prefix)?;
        self.cache.put(station.clone());
        Ok(Some(station))
    }

    // ========================================================================
    // Station listings
    // ========================================================================

    /// Stations in a country, exact match, ordered by name
    pub async fn stations_by_country(&self, country: &str) -> Result<Vec<Station>> {
        self.collect_stations(
            "stations/search",
            &[
                ("order", "name"),
                ("reverse", "false"),
                ("countryExact", "true"),
                ("country", country),
            ],
        )
        .await
    }

    /// Stations in a language, exact match, ordered by name
    pub async fn stations_by_language(&self, language: &str) -> Result<Vec<Station>> {
        self.collect_stations(
            "stations/search",
            &[
                ("order", "name"),
                ("reverse", "false"),
                ("languageExact", "true"),
                ("language", language),
            ],
        )
        .await
    }

    /// Stations carrying a tag, exact match, ordered by name
    pub async fn stations_by_genre(&self, genre: &str) -> Result<Vec<Station>> {
        self.collect_stations(
            "stations/search",
            &[
                ("order", "name"),
                ("reverse", "false"),
                ("tagExact", "true"),
                ("tag", genre),
            ],
        )
        .await
    }

    /// Most-voted stations, provider order (descending votes)
    ///
    /// `limit` defaults to the builder's station limit. The limit is
    /// also enforced locally in case the provider returns more.
    pub async fn stations_by_votes(&self, limit: Option<u32>) -> Result<Vec<Station>> {
        let limit = limit.unwrap_or(self.default_limit);
        let limit_s = limit.to_string();

        let mut stations = self
            .collect_stations(
                "stations",
                &[
                    ("order", "votes"),
                    ("reverse", "true"),
                    ("limit", &limit_s),
                ],
            )
            .await?;

        stations.truncate(limit as usize);
        Ok(stations)
    }

    /// Free-text search on station names, ordered by name
    ///
    /// The query is percent-encoded, so reserved characters like `&`
    /// are safe to pass.
    pub async fn search(&self, name: &str, limit: Option<u32>) -> Result<Vec<Station>> {
        let limit = limit.unwrap_or(self.default_limit).to_string();

        self.collect_stations(
            "stations/search",
            &[
                ("order", "name"),
                ("reverse", "false"),
                ("limit", &limit),
                ("name", name),
            ],
        )
        .await
    }

    /// Shared listing flow: clear cache, fetch, filter, cache, collect
    async fn collect_stations(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Station>> {
        self.cache.clear();

        let records = Self::as_array(self.get_json(path, params).await?)?;
        let total = records.len();

        let mut stations = Vec::new();
        for value in records {
            let record: StationRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("skipping malformed station record: {}", err);
                    continue;
                }
            };

            if !self.filter.accept(&record) {
                continue;
            }

            match Station::from_record(record, &self.id_prefix) {
                Ok(station) => {
                    self.cache.put(station.clone());
                    stations.push(station);
                }
                Err(err) => tracing::warn!("skipping station record: {}", err),
            }
        }

        tracing::info!("Stations ({}/{})", stations.len(), total);
        Ok(stations)
    }

    // ========================================================================
    // Directory listings
    // ========================================================================

    /// Browsable countries (more stations than the country minimum)
    pub async fn country_directories(&self) -> Result<Vec<Directory>> {
        self.collect_directories("countries", self.min_count_country, |name, count| {
            Directory::new(name, count)
        })
        .await
    }

    /// Browsable languages, with title-cased display names
    pub async fn language_directories(&self) -> Result<Vec<Directory>> {
        self.collect_directories("languages", self.min_count_language, |name, count| {
            Directory::with_display_name(name, count, title_case(name))
        })
        .await
    }

    /// Browsable genres (tags), with capitalized display names
    pub async fn genre_directories(&self) -> Result<Vec<Directory>> {
        self.collect_directories("tags", self.min_count_genre, |name, count| {
            Directory::with_display_name(name, count, capitalize(name))
        })
        .await
    }

    /// Shared directory flow: fetch counts, drop small or nameless
    /// entries (strictly greater than `minimum` survives), map to
    /// [`Directory`] values
    async fn collect_directories(
        &self,
        path: &str,
        minimum: u32,
        make: impl Fn(&str, u32) -> Directory,
    ) -> Result<Vec<Directory>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if !self.show_broken {
            params.push(("hidebroken", "true"));
        }

        let records = Self::as_array(self.get_json(path, &params).await?)?;

        let mut directories = Vec::new();
        for value in records {
            let record: CountRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("skipping malformed directory record: {}", err);
                    continue;
                }
            };

            if record.name.is_empty() || record.stationcount <= minimum {
                continue;
            }

            directories.push(make(&record.name, record.stationcount));
        }

        Ok(directories)
    }

    // ========================================================================
    // Playable URL resolution
    // ========================================================================

    /// Resolve the playable URL for a provider UUID
    ///
    /// The `url/<uuid>` endpoint unwraps playlists (M3U, PLS) into the
    /// first actual stream URL.
    pub async fn playable_url(&self, stationuuid: &str) -> Result<String> {
        let value = self.get_json(&format!("url/{}", stationuuid), &[]).await?;

        Self::as_array(value)?
            .into_iter()
            .next()
            .and_then(|entry| {
                entry
                    .get("url")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .ok_or_else(|| Error::NoPlayableUrl(stationuuid.to_string()))
    }

    /// Refresh `station.url` in place with the resolved playable URL
    ///
    /// On failure the previous URL is kept and the error is only logged,
    /// so a stale-but-working URL is never thrown away.
    pub async fn resolve_playable_url(&self, station: &mut Station) {
        match self.playable_url(&station.stationuuid).await {
            Ok(url) => station.url = url,
            Err(err) => tracing::error!(
                "could not resolve playable URL for station '{}': {}",
                station.stationuuid,
                err
            ),
        }
    }
}

/// Builder for configuring a RadioBrowserClient
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    id_prefix: String,
    default_limit: u32,
    min_count_country: u32,
    min_count_language: u32,
    min_count_genre: u32,
    show_broken_stations: bool,
    require_favicon: bool,
    filter: Option<Arc<dyn StationFilter>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            default_limit: DEFAULT_STATION_LIMIT,
            min_count_country: MINIMUM_COUNT_COUNTRY,
            min_count_language: MINIMUM_COUNT_LANGUAGE,
            min_count_genre: MINIMUM_COUNT_GENRE,
            show_broken_stations: false,
            require_favicon: false,
            filter: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the prefix used for local station ids
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the default limit for vote listings and searches
    pub fn station_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the minimum station count for country directories
    pub fn minimum_count_country(mut self, minimum: u32) -> Self {
        self.min_count_country = minimum;
        self
    }

    /// Set the minimum station count for language directories
    pub fn minimum_count_language(mut self, minimum: u32) -> Self {
        self.min_count_language = minimum;
        self
    }

    /// Set the minimum station count for genre directories
    pub fn minimum_count_genre(mut self, minimum: u32) -> Self {
        self.min_count_genre = minimum;
        self
    }

    /// Include stations and directory entries that failed the
    /// provider's last stream check (default: hidden)
    pub fn show_broken_stations(mut self, show: bool) -> Self {
        self.show_broken_stations = show;
        self
    }

    /// Drop stations without a favicon from listings (default: kept)
    pub fn require_favicon(mut self, require: bool) -> Self {
        self.require_favicon = require;
        self
    }

    /// Install a custom station filter, replacing the built-in
    /// visibility filter
    pub fn filter(mut self, filter: Arc<dyn StationFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RadioBrowserClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().user_agent(&self.user_agent).build()?,
        };

        // The favicon knob opts into record filtering; without it,
        // listings pass through untouched and only the directory
        // endpoints honor the broken-station knob (via hidebroken).
        let filter: Arc<dyn StationFilter> = match self.filter {
            Some(filter) => filter,
            None if self.require_favicon => Arc::new(VisibilityFilter {
                show_broken: self.show_broken_stations,
                require_favicon: true,
            }),
            None => Arc::new(AcceptAll),
        };

        Ok(RadioBrowserClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            id_prefix: self.id_prefix,
            default_limit: self.default_limit,
            min_count_country: self.min_count_country,
            min_count_language: self.min_count_language,
            min_count_genre: self.min_count_genre,
            show_broken: self.show_broken_stations,
            filter,
            cache: Arc::new(StationCache::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            builder.timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(builder.id_prefix, DEFAULT_ID_PREFIX);
        assert_eq!(builder.default_limit, DEFAULT_STATION_LIMIT);
        assert!(!builder.show_broken_stations);
        assert!(!builder.require_favicon);
    }

    #[test]
    fn test_builder_knobs() {
        let client = RadioBrowserClient::builder()
            .base_url("http://localhost:1234")
            .id_prefix("XX")
            .station_limit(10)
            .minimum_count_genre(2)
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:1234");
        assert_eq!(client.id_prefix(), "XX");
        assert_eq!(client.default_limit, 10);
        assert_eq!(client.min_count_genre, 2);
    }

    #[test]
    fn test_clones_share_cache() {
        let client = RadioBrowserClient::new().unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.cache, &clone.cache));
    }
}
