//! Handlers for the pickup scheduling workflow.
//!
//! A request is created `pending` and transitions exactly once: `accept`
//! credits a visit to both parties atomically, `reject` records a reason
//! and a counter-proposed date. Both transitions are guarded by the full
//! `(id, company_id, user_id, pending)` predicate, so a terminal row or a
//! mismatched party surfaces as 404 with no side effects.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use ecosort_core::error::CoreError;
use ecosort_core::types::DbId;
use ecosort_db::models::schedule::{CreateSchedule, Schedule};
use ecosort_db::repositories::ScheduleRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::profile::UserIdQuery;
use crate::handlers::{require, require_text};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /companySchedule`.
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub company_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

/// Request body for `POST /acceptSchedule`.
#[derive(Debug, Deserialize)]
pub struct AcceptScheduleRequest {
    pub id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub user_id: Option<DbId>,
}

/// Request body for `POST /rejectSchedule`; `date` is the counter-proposal.
#[derive(Debug, Deserialize)]
pub struct RejectScheduleRequest {
    pub id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub reason: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Response body wrapping a single schedule row.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub message: &'static str,
    pub schedule: Schedule,
}

/// Response body wrapping a schedule listing.
#[derive(Debug, Serialize)]
pub struct ScheduleListResponse {
    pub message: &'static str,
    pub schedules: Vec<Schedule>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /companySchedule
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(input): Json<CreateScheduleRequest>,
) -> AppResult<(StatusCode, Json<ScheduleResponse>)> {
    let company_id = require(input.company_id, "company_id")?;
    let user_id = require(input.user_id, "user_id")?;
    let date = require(input.date, "date")?;
    let time = require(input.time, "time")?;

    let schedule = ScheduleRepo::create(
        &state.pool,
        &CreateSchedule {
            company_id,
            user_id,
            date,
            time,
        },
    )
    .await?;

    tracing::info!(schedule_id = schedule.id, company_id, user_id, "Schedule requested");

    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse {
            message: "Schedule created successfully",
            schedule,
        }),
    ))
}

/// GET /displayuserSchedule?user_id=
pub async fn list_user_schedules(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> AppResult<Json<ScheduleListResponse>> {
    let schedules = ScheduleRepo::list_for_user(&state.pool, params.user_id).await?;

    Ok(Json(ScheduleListResponse {
        message: "Schedules retrieved successfully",
        schedules,
    }))
}

/// GET /displayCompanySchedule?user_id=
pub async fn list_company_schedules(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> AppResult<Json<ScheduleListResponse>> {
    let schedules = ScheduleRepo::list_for_company(&state.pool, params.user_id).await?;

    Ok(Json(ScheduleListResponse {
        message: "Schedules retrieved successfully",
        schedules,
    }))
}

/// POST /acceptSchedule
///
/// Accept a pending request and credit a visit to both parties.
pub async fn accept_schedule(
    State(state): State<AppState>,
    Json(input): Json<AcceptScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    let id = require(input.id, "id")?;
    let company_id = require(input.company_id, "company_id")?;
    let user_id = require(input.user_id, "user_id")?;

    let schedule = ScheduleRepo::accept(&state.pool, id, company_id, user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Schedule",
                id,
            })
        })?;

    tracing::info!(schedule_id = id, company_id, user_id, "Schedule accepted");

    Ok(Json(ScheduleResponse {
        message: "Schedule accepted successfully",
        schedule,
    }))
}

/// POST /rejectSchedule
///
/// Reject a pending request, recording the reason and rewriting the date
/// as a counter-proposal.
pub async fn reject_schedule(
    State(state): State<AppState>,
    Json(input): Json<RejectScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    let id = require(input.id, "id")?;
    let company_id = require(input.company_id, "company_id")?;
    let user_id = require(input.user_id, "user_id")?;
    let reason = require_text(input.reason, "reason")?;
    let date = require(input.date, "date")?;

    let schedule = ScheduleRepo::reject(&state.pool, id, company_id, user_id, &reason, date)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Schedule",
                id,
            })
        })?;

    tracing::info!(schedule_id = id, company_id, user_id, "Schedule rejected");

    Ok(Json(ScheduleResponse {
        message: "Schedule rejected successfully",
        schedule,
    }))
}
