//! Coordinate pair formatting and parsing.
//!
//! Profiles store coordinates as a single `"<lat>, <lng>"` text column.
//! The geocoding adapter produces [`Coordinates`]; everything that reads
//! the column back goes through [`Coordinates::parse`] so malformed or
//! legacy values degrade to `None` instead of corrupting responses.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Build a pair, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    /// Format for the `coordinates` text column: `"<lat>, <lng>"`.
    pub fn storage_format(&self) -> String {
        format!("{}, {}", self.lat, self.lng)
    }

    /// Parse a stored `"<lat>, <lng>"` value. Returns `None` for anything
    /// that is not two comma-separated finite numbers in range.
    pub fn parse(value: &str) -> Option<Self> {
        let (lat, lng) = value.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lng: f64 = lng.trim().parse().ok()?;
        Self::new(lat, lng)
    }
}
