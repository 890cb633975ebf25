//! Handler for quiz score submission.
//!
//! The corpus carried two divergent designs (append-only event log vs.
//! direct points accumulation); this implementation does both in one
//! transaction, so the log stays authoritative and the profile total
//! stays queryable.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ecosort_core::error::CoreError;
use ecosort_core::profile::validate_quiz_score;
use ecosort_core::types::DbId;
use ecosort_db::models::quiz_score::QuizScore;
use ecosort_db::repositories::QuizScoreRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require;
use crate::state::AppState;

/// Request body for `POST /quiz_scores`.
#[derive(Debug, Deserialize)]
pub struct QuizScoreRequest {
    pub user_id: Option<DbId>,
    pub score: Option<i32>,
}

/// Response body: the appended event and the folded total.
#[derive(Debug, Serialize)]
pub struct QuizScoreResponse {
    pub message: &'static str,
    pub quiz_score: QuizScore,
    pub total_points: i64,
}

/// POST /quiz_scores
///
/// Append a quiz result and fold it into the profile points total.
/// Requires an existing profile row to fold into.
pub async fn create_quiz_score(
    State(state): State<AppState>,
    Json(input): Json<QuizScoreRequest>,
) -> AppResult<(StatusCode, Json<QuizScoreResponse>)> {
    let user_id = require(input.user_id, "user_id")?;
    let score = require(input.score, "score")?;

    validate_quiz_score(score)?;

    let (quiz_score, total_points) = QuizScoreRepo::record(&state.pool, user_id, score)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: user_id,
            })
        })?;

    tracing::info!(user_id, score, total_points, "Quiz score recorded");

    Ok((
        StatusCode::CREATED,
        Json(QuizScoreResponse {
            message: "Quiz score recorded successfully",
            quiz_score,
            total_points,
        }),
    ))
}
