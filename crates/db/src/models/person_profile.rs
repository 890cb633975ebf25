//! Person profile model for the `user_profile` table.

use ecosort_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_profile` table.
///
/// Coordinates are an internal derivation from the location string and are
/// skipped during serialization; map-style endpoints expose them as parsed
/// lat/lng pairs instead.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PersonProfile {
    pub user_id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
    #[serde(skip_serializing)]
    pub coordinates: Option<String>,
    pub level: i32,
    pub points: i64,
    pub visit: i32,
    pub streaks: i32,
    pub waste_weight: f64,
}

/// DTO for the profile upsert endpoint.
///
/// Gameplay counters are deliberately absent: they initialize to zero on
/// insert and are advanced only by their owning flows. Coordinates are
/// derived server-side from `location`, never taken from the client.
#[derive(Debug, Deserialize)]
pub struct UpsertPersonProfile {
    pub user_id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
}

/// Projection for the map view: every profile that has coordinates.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileLocation {
    pub user_id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub coordinates: Option<String>,
}

/// Projection for the leaderboard query.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LeaderboardEntry {
    pub user_id: DbId,
    pub name: String,
    pub points: i64,
    pub profile_image: Option<String>,
}
