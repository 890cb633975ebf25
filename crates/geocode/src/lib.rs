//! Geocoding adapter: free-text location string to coordinates.
//!
//! Wraps a Nominatim-style search endpoint with [`reqwest`]. The public
//! surface fails closed: any network error, non-2xx status, empty
//! candidate list, or unparsable payload is logged and collapsed to
//! `None`, so callers only ever see "coordinates or nothing".

use ecosort_core::coords::Coordinates;
use serde::Deserialize;

/// One candidate from the search endpoint. Nominatim serves latitude and
/// longitude as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Errors from the geocoding HTTP layer. Internal only; the public
/// [`Geocoder::geocode`] flattens them to `None`.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Geocoding API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// HTTP client for the geocoding lookup service.
pub struct Geocoder {
    client: reqwest::Client,
    api_url: String,
}

impl Geocoder {
    /// Create a client for the given base URL, e.g.
    /// `https://nominatim.openstreetmap.org`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (shares
    /// connection pooling and the configured timeout with the other
    /// adapters).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Resolve a free-text location to coordinates. First candidate wins.
    pub async fn geocode(&self, query: &str) -> Option<Coordinates> {
        match self.search(query).await {
            Ok(hits) => {
                let resolved = hits.into_iter().next().and_then(hit_to_coordinates);
                if resolved.is_none() {
                    tracing::debug!(query, "Geocoding lookup yielded no usable candidate");
                }
                resolved
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Geocoding lookup failed");
                None
            }
        }
    }

    /// Raw search call against `GET /search?q=...&format=json&limit=1`.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, GeocodeApiError> {
        let response = self
            .client
            .get(format!("{}/search", self.api_url))
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeocodeApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Convert a search hit into validated coordinates.
fn hit_to_coordinates(hit: SearchHit) -> Option<Coordinates> {
    let lat: f64 = hit.lat.trim().parse().ok()?;
    let lng: f64 = hit.lon.trim().parse().ok()?;
    Coordinates::new(lat, lng)
}
