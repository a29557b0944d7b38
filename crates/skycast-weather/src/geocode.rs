//! Geocoding client: resolve a place name or coordinate pair to a
//! canonical location via the Open-Meteo geocoding API.

use std::time::Duration;

use serde::Deserialize;
use skycast_core::{Error, GeocodingConfig};
use tracing::instrument;

use crate::types::{LocationQuery, ResolvedLocation};

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a client against the configured geocoding endpoint.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &GeocodingConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Resolve a location query to a canonical name and coordinates.
    ///
    /// Text queries are forward-geocoded and fail with
    /// [`Error::LocationNotFound`] when the provider has no candidates.
    /// Coordinate queries never fail: the reverse lookup is best-effort
    /// and falls back to a formatted "Lat, Lon" display name.
    #[instrument(skip(self), level = "info")]
    pub async fn resolve(&self, query: &LocationQuery) -> Result<ResolvedLocation, Error> {
        match query {
            LocationQuery::Name(name) => self.search(name).await,
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => Ok(self.reverse(*latitude, *longitude).await),
        }
    }

    async fn search(&self, name: &str) -> Result<ResolvedLocation, Error> {
        let url = format!(
            "{}/search?name={}&count=1",
            self.base_url,
            urlencoding::encode(name),
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: GeocodeResponse = response.json().await?;

        let result = body
            .results
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| Error::LocationNotFound(name.to_string()))?;

        let resolved = ResolvedLocation {
            display_name: result.display_name(),
            latitude: result.latitude,
            longitude: result.longitude,
        };
        tracing::info!("Resolved '{}' to {}", name, resolved.display_name);
        Ok(resolved)
    }

    /// Reverse geocode, falling back to formatted coordinates on any failure.
    async fn reverse(&self, latitude: f64, longitude: f64) -> ResolvedLocation {
        let display_name = match self.reverse_lookup(latitude, longitude).await {
            Some(name) => name,
            None => {
                tracing::debug!("Reverse geocode unavailable, using coordinates");
                format!("Lat: {:.2}, Lon: {:.2}", latitude, longitude)
            }
        };

        ResolvedLocation {
            display_name,
            latitude,
            longitude,
        }
    }

    async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> Option<String> {
        let url = format!(
            "{}/search?latitude={}&longitude={}&count=1",
            self.base_url, latitude, longitude,
        );

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Reverse geocode request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Reverse geocode returned status {}", response.status());
            return None;
        }

        let body: GeocodeResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!("Reverse geocode parse error: {}", e);
                return None;
            }
        };

        body.results
            .and_then(|r| r.into_iter().next())
            .map(|r| r.display_name())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    admin1: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl GeocodeResult {
    /// Join name, admin region, and country, skipping absent parts.
    fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        for part in [&self.admin1, &self.country] {
            if let Some(p) = part {
                if !p.is_empty() {
                    parts.push(p);
                }
            }
        }
        parts.join(", ")
    }
}
