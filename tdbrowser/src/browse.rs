//! Menu-facing adapter over the client
//!
//! The downstream menu protocol renders a failed lookup exactly like an
//! empty one, so this adapter downgrades every client error to an empty
//! listing (or `None`) and logs it. Code that needs to distinguish
//! failure kinds uses [`RadioBrowserClient`] directly.

use crate::client::RadioBrowserClient;
use crate::models::{Directory, Station};

/// Thin wrapper that never fails, matching menu semantics
#[derive(Clone)]
pub struct DirectoryBrowser {
    client: RadioBrowserClient,
}

impl DirectoryBrowser {
    /// Wrap a configured client
    pub fn new(client: RadioBrowserClient) -> Self {
        Self { client }
    }

    /// Access the underlying client
    pub fn client(&self) -> &RadioBrowserClient {
        &self.client
    }

    fn log_and_empty<T>(context: &str, err: crate::Error) -> Vec<T> {
        tracing::error!("{} failed: {}", context, err);
        Vec::new()
    }

    /// Browsable countries, empty on failure
    pub async fn country_directories(&self) -> Vec<Directory> {
        self.client
            .country_directories()
            .await
            .unwrap_or_else(|err| Self::log_and_empty("country listing", err))
    }

    /// Browsable languages, empty on failure
    pub async fn language_directories(&self) -> Vec<Directory> {
        self.client
            .language_directories()
            .await
            .unwrap_or_else(|err| Self::log_and_empty("language listing", err))
    }

    /// Browsable genres, empty on failure
    pub async fn genre_directories(&self) -> Vec<Directory> {
        self.client
            .genre_directories()
            .await
            .unwrap_or_else(|err| Self::log_and_empty("genre listing", err))
    }

    /// Stations in a country, empty on failure
    pub async fn stations_by_country(&self, country: &str) -> Vec<Station> {
        self.client
            .stations_by_country(country)
            .await
            .unwrap_or_else(|err| Self::log_and_empty("country stations", err))
    }

    /// Stations in a language, empty on failure
    pub async fn stations_by_language(&self, language: &str) -> Vec<Station> {
        self.client
            .stations_by_language(language)
            .await
            .unwrap_or_else(|err| Self::log_and_empty("language stations", err))
    }

    /// Stations carrying a tag, empty on failure
    pub async fn stations_by_genre(&self, genre: &str) -> Vec<Station> {
        self.client
            .stations_by_genre(genre)
            .await
            .unwrap_or_else(|err| Self::log_and_empty("genre stations", err))
    }

    /// Most-voted stations, empty on failure
    pub async fn stations_by_votes(&self, limit: Option<u32>) -> Vec<Station> {
        self.client
            .stations_by_votes(limit)
            .await
            .unwrap_or_else(|err| Self::log_and_empty("vote listing", err))
    }

    /// Free-text search, empty on failure
    pub async fn search(&self, name: &str, limit: Option<u32>) -> Vec<Station> {
        self.client
            .search(name, limit)
            .await
            .unwrap_or_else(|err| Self::log_and_empty("search", err))
    }

    /// Point lookup by local id; any failure (including a malformed id)
    /// reads as not-found
    pub async fn station_by_id(&self, id: &str) -> Option<Station> {
        match self.client.station_by_id(id).await {
            Ok(station) => station,
            Err(err) => {
                tracing::error!("station lookup for '{}' failed: {}", id, err);
                None
            }
        }
    }

    /// Refresh the station's stream URL in place; keeps the old URL on
    /// failure
    pub async fn resolve_playable_url(&self, station: &mut Station) {
        self.client.resolve_playable_url(station).await;
    }
}
