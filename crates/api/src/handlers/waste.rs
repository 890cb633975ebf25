//! Handler for the waste-upload validation pipeline.
//!
//! The one flow here with real sequencing: detect bins in the front view,
//! require one top view per detected bin, classify every top view, then
//! run the purity and uniqueness checks from `ecosort_core::sorting`.
//! The submission row is written only after every step passes; rejections
//! are soft 400s carrying the per-bin classification results, while
//! adapter failures surface through the error taxonomy as upstream
//! errors.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use ecosort_core::error::CoreError;
use ecosort_core::sorting::{
    check_bin_count, label_set, validate_sorting, validate_top_view_count, LabelSet,
};
use ecosort_core::types::DbId;
use ecosort_db::models::waste_image::CreateWasteImage;
use ecosort_db::repositories::WasteImageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require, require_text};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /wasteUpload`.
#[derive(Debug, Deserialize)]
pub struct WasteUploadRequest {
    pub user_id: Option<DbId>,
    pub level: Option<i32>,
    pub front_view: Option<String>,
    pub top_views: Option<Vec<String>>,
}

/// Classification outcome for one bin, in submission order.
#[derive(Debug, Serialize)]
pub struct BinResult {
    pub bin: usize,
    pub labels: Vec<String>,
}

/// Soft rejection: the detector saw a different number of bins than the
/// caller photographed.
#[derive(Debug, Serialize)]
pub struct BinCountRejection {
    pub error: String,
    pub code: &'static str,
    pub detected_bins: i64,
    pub submitted_views: usize,
}

/// Soft rejection: a sorting rule was broken. Carries the full per-bin
/// results so the caller can see what the classifier saw.
#[derive(Debug, Serialize)]
pub struct SortingRejection {
    pub error: String,
    pub code: &'static str,
    pub bins: Vec<BinResult>,
}

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct WasteUploadResponse {
    pub message: &'static str,
    pub image_id: DbId,
    pub classification: Vec<BinResult>,
}

fn bin_results(label_sets: &[LabelSet]) -> Vec<BinResult> {
    label_sets
        .iter()
        .enumerate()
        .map(|(i, labels)| BinResult {
            bin: i + 1,
            labels: labels.iter().cloned().collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /wasteUpload
///
/// Validate and persist a waste-sorting submission.
pub async fn waste_upload(
    State(state): State<AppState>,
    Json(input): Json<WasteUploadRequest>,
) -> AppResult<Response> {
    // 1. Shape checks before any adapter call.
    let user_id = require(input.user_id, "user_id")?;
    let level = require(input.level, "level")?;
    let front_view = require_text(input.front_view, "front_view")?;
    let top_views = require(input.top_views, "top_views")?;
    validate_top_view_count(top_views.len())?;

    // 2. Count bins in the front view.
    let detected = state
        .bin_detector
        .count_bins(&front_view)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::Upstream(
                "Bin detection service returned no result".into(),
            ))
        })?;

    // 3. One top view per detected bin.
    if let Err(mismatch) = check_bin_count(detected, top_views.len()) {
        tracing::debug!(
            user_id,
            detected = mismatch.detected,
            submitted = mismatch.submitted,
            "Waste upload rejected: bin count mismatch"
        );
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(BinCountRejection {
                error: format!(
                    "Detected {} bins but received {} top view images",
                    mismatch.detected, mismatch.submitted
                ),
                code: "BIN_COUNT_MISMATCH",
                detected_bins: mismatch.detected,
                submitted_views: mismatch.submitted,
            }),
        )
            .into_response());
    }

    // 4. Classify every top view into a label-set.
    let mut label_sets: Vec<LabelSet> = Vec::with_capacity(top_views.len());
    for top_view in &top_views {
        let labels = state.classifier.classify(top_view).await.ok_or_else(|| {
            AppError::Core(CoreError::Upstream(
                "Waste classification service returned no result".into(),
            ))
        })?;
        label_sets.push(label_set(&labels));
    }

    // 5+6. Purity, then cross-bin uniqueness.
    if let Err(violation) = validate_sorting(&label_sets) {
        tracing::debug!(user_id, ?violation, "Waste upload rejected: sorting violation");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(SortingRejection {
                error: violation.message(),
                code: "SORTING_REJECTED",
                bins: bin_results(&label_sets),
            }),
        )
            .into_response());
    }

    // 7. All checks passed: persist the submission.
    let mut image_refs = vec![front_view];
    image_refs.extend(top_views);

    let image = WasteImageRepo::create(
        &state.pool,
        &CreateWasteImage {
            user_id,
            level,
            image_url: image_refs.join(","),
        },
    )
    .await?;

    tracing::info!(user_id, image_id = image.id, level, "Waste upload accepted");

    Ok((
        StatusCode::CREATED,
        Json(WasteUploadResponse {
            message: "Waste upload validated successfully",
            image_id: image.id,
            classification: bin_results(&label_sets),
        }),
    )
        .into_response())
}
