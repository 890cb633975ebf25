//! Handlers for person profiles: upsert, display, and the map view.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use ecosort_core::coords::Coordinates;
use ecosort_core::error::CoreError;
use ecosort_core::types::DbId;
use ecosort_db::models::person_profile::{PersonProfile, UpsertPersonProfile};
use ecosort_db::repositories::PersonProfileRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require, require_text};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /getprofile`.
///
/// Coordinates are derived server-side from `location`; any
/// client-supplied coordinate field is ignored.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    pub user_id: Option<DbId>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub profile_image: Option<String>,
}

/// Query parameters for profile lookups.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: DbId,
}

/// Response body wrapping a profile row.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: &'static str,
    pub profile: PersonProfile,
}

/// One entry of the map view.
#[derive(Debug, Serialize)]
pub struct UserLocation {
    pub user_id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// Response body for `GET /getalluserprofile`.
#[derive(Debug, Serialize)]
pub struct AllProfilesResponse {
    pub message: &'static str,
    pub locations: Vec<UserLocation>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /getprofile
///
/// Create or update the caller's profile. When a location string is
/// supplied it is geocoded and the resulting pair stored; a failed lookup
/// stores no coordinates rather than failing the upsert. Gameplay
/// counters survive repeated upserts untouched.
pub async fn upsert_profile(
    State(state): State<AppState>,
    Json(input): Json<UpsertProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    let user_id = require(input.user_id, "user_id")?;
    let name = require_text(input.name, "name")?;

    let coordinates = match input.location.as_deref() {
        Some(location) if !location.trim().is_empty() => state
            .geocoder
            .geocode(location)
            .await
            .map(|c| c.storage_format()),
        _ => None,
    };

    let profile = PersonProfileRepo::upsert(
        &state.pool,
        &UpsertPersonProfile {
            user_id,
            name,
            bio: input.bio,
            location: input.location,
            age: input.age,
            profile_image: input.profile_image,
        },
        coordinates.as_deref(),
    )
    .await?;

    tracing::info!(user_id, "Profile created or updated");

    Ok(Json(ProfileResponse {
        message: "Profile created or updated successfully",
        profile,
    }))
}

/// GET /displayprofile?user_id=
///
/// Fetch a profile. Coordinates are internal and not serialized.
pub async fn display_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> AppResult<Json<ProfileResponse>> {
    let profile = PersonProfileRepo::find_by_id(&state.pool, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: params.user_id,
            })
        })?;

    Ok(Json(ProfileResponse {
        message: "Profile retrieved successfully",
        profile,
    }))
}

/// GET /getalluserprofile
///
/// Map view: every profile with stored coordinates, as parsed lat/lng
/// pairs. Rows whose stored value fails to parse are skipped rather than
/// served as garbage.
pub async fn all_profiles(State(state): State<AppState>) -> AppResult<Json<AllProfilesResponse>> {
    let rows = PersonProfileRepo::list_locations(&state.pool).await?;

    let locations = rows
        .into_iter()
        .filter_map(|row| {
            let coords = row.coordinates.as_deref().and_then(Coordinates::parse)?;
            Some(UserLocation {
                user_id: row.user_id,
                name: row.name,
                bio: row.bio,
                lat: coords.lat,
                lng: coords.lng,
            })
        })
        .collect();

    Ok(Json(AllProfilesResponse {
        message: "Profiles retrieved successfully",
        locations,
    }))
}
