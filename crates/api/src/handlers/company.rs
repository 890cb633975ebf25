//! Handlers for company profiles.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use ecosort_core::coords::Coordinates;
use ecosort_core::error::CoreError;
use ecosort_core::types::DbId;
use ecosort_db::models::company_profile::{CompanyProfile, UpsertCompanyProfile};
use ecosort_db::repositories::CompanyProfileRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::profile::UserIdQuery;
use crate::handlers::{require, require_text};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /getcompanyprofile`.
#[derive(Debug, Deserialize)]
pub struct UpsertCompanyRequest {
    pub user_id: Option<DbId>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub contact_number: Option<String>,
    pub profile_image: Option<String>,
    pub building_image: Option<String>,
    pub price: Option<f64>,
}

/// Response body wrapping a company profile row.
#[derive(Debug, Serialize)]
pub struct CompanyProfileResponse {
    pub message: &'static str,
    pub profile: CompanyProfile,
}

/// Response body for the public `GET /displaycompany` lookup.
#[derive(Debug, Serialize)]
pub struct CompanyLocationResponse {
    pub company_name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /getcompanyprofile
///
/// Create or update a company profile; same geocoding and counter rules
/// as the person profile upsert.
pub async fn upsert_company(
    State(state): State<AppState>,
    Json(input): Json<UpsertCompanyRequest>,
) -> AppResult<Json<CompanyProfileResponse>> {
    let user_id = require(input.user_id, "user_id")?;
    let company_name = require_text(input.company_name, "company_name")?;

    let coordinates = match input.location.as_deref() {
        Some(location) if !location.trim().is_empty() => state
            .geocoder
            .geocode(location)
            .await
            .map(|c| c.storage_format()),
        _ => None,
    };

    let profile = CompanyProfileRepo::upsert(
        &state.pool,
        &UpsertCompanyProfile {
            user_id,
            company_name,
            location: input.location,
            contact_number: input.contact_number,
            profile_image: input.profile_image,
            building_image: input.building_image,
            price: input.price,
        },
        coordinates.as_deref(),
    )
    .await?;

    tracing::info!(user_id, "Company profile created or updated");

    Ok(Json(CompanyProfileResponse {
        message: "Company profile created or updated successfully",
        profile,
    }))
}

/// GET /displaycompanyprofile?user_id=
pub async fn display_company_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> AppResult<Json<CompanyProfileResponse>> {
    let profile = CompanyProfileRepo::find_by_id(&state.pool, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CompanyProfile",
                id: params.user_id,
            })
        })?;

    Ok(Json(CompanyProfileResponse {
        message: "Company profile retrieved successfully",
        profile,
    }))
}

/// GET /displaycompany?user_id=
///
/// Public lookup: company name and map position. Companies whose stored
/// coordinates are absent or unparseable serve null lat/lng.
pub async fn display_company(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> AppResult<Json<CompanyLocationResponse>> {
    let row = CompanyProfileRepo::find_location(&state.pool, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CompanyProfile",
                id: params.user_id,
            })
        })?;

    let coords = row.coordinates.as_deref().and_then(Coordinates::parse);

    Ok(Json(CompanyLocationResponse {
        company_name: row.company_name,
        lat: coords.map(|c| c.lat),
        lng: coords.map(|c| c.lng),
    }))
}
