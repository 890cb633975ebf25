//! Handler for the points leaderboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use ecosort_core::profile::{DEFAULT_PROFILE_IMAGE, LEADERBOARD_LIMIT};
use ecosort_core::types::DbId;
use ecosort_db::repositories::PersonProfileRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// One leaderboard row; the image falls back to the placeholder at
/// response time and the substitution is never written back.
#[derive(Debug, Serialize)]
pub struct LeaderboardRow {
    pub user_id: DbId,
    pub name: String,
    pub points: i64,
    pub profile_image: String,
}

/// Response body for `GET /leaderboard`.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub message: &'static str,
    pub leaderboard: Vec<LeaderboardRow>,
}

/// GET /leaderboard
///
/// Top 20 profiles by points, descending.
pub async fn leaderboard(State(state): State<AppState>) -> AppResult<Json<LeaderboardResponse>> {
    let entries = PersonProfileRepo::top_by_points(&state.pool, LEADERBOARD_LIMIT).await?;

    let leaderboard = entries
        .into_iter()
        .map(|e| LeaderboardRow {
            user_id: e.user_id,
            name: e.name,
            points: e.points,
            profile_image: e
                .profile_image
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string()),
        })
        .collect();

    Ok(Json(LeaderboardResponse {
        message: "Leaderboard retrieved successfully",
        leaderboard,
    }))
}
