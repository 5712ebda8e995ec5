//! radio-browser directory client for TuneDial
//!
//! This crate translates the public [radio-browser.info] station
//! directory into [`Station`] and [`Directory`] values consumable by a
//! media-menu layer.
//!
//! # Features
//!
//! - **Browse**: countries, languages and genres, filtered to groupings
//!   with enough stations to be worth a menu entry
//! - **Listings**: by country/language/genre (exact match), by votes,
//!   and free-text search
//! - **Point lookup**: stations are addressed by a compact local id
//!   derived from the provider UUID, backed by an in-process cache so
//!   menu drill-downs avoid a second round trip
//! - **Playable URLs**: playlist entries (M3U, PLS) unwrapped into the
//!   first actual stream URL
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
//!     // Browse genres with enough stations
//!     let genres = client.genre_directories().await?;
//!     println!("{} genres", genres.len());
//!
//!     // List jazz stations; each ends up in the cache under its id
//!     let stations = client.stations_by_genre("jazz").await?;
//!     if let Some(station) = stations.first() {
//!         // Later point lookup hits the cache, no HTTP round trip
//!         let again = client.station_by_id(&station.id).await?;
//!         assert!(again.is_some());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Menu integration
//!
//! The menu layer treats every failure as an empty listing. Wrap the
//! client in a [`DirectoryBrowser`] to get that behavior while keeping
//! the underlying error kinds available to tests and logs:
//!
//! ```no_run
//! use tdbrowser::{DirectoryBrowser, RadioBrowserClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let browser = DirectoryBrowser::new(RadioBrowserClient::new()?);
//! // Never fails; transport errors come back as an empty Vec
//! let countries = browser.country_directories().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Caveats
//!
//! Requests are fire-once against the provider: no retries, no backoff.
//! The station cache is best-effort memoization, not a correctness
//! mechanism; every listing call clears it before repopulating.
//!
//! [radio-browser.info]: https://www.radio-browser.info

pub mod browse;
pub mod cache;
pub mod client;
pub mod error;
pub mod filter;
pub mod ids;
pub mod models;

// Re-exports
pub use browse::DirectoryBrowser;
pub use cache::StationCache;
pub use client::{ClientBuilder, RadioBrowserClient};
pub use error::{Error, Result};
pub use filter::{AcceptAll, StationFilter, VisibilityFilter};
pub use models::{CountRecord, Directory, Station, StationRecord};
