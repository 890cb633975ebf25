//! Waste image submission model for the `waste_images` table.

use ecosort_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A validated, immutable waste image submission.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WasteImage {
    pub id: DbId,
    pub user_id: DbId,
    pub level: i32,
    /// Front view plus top views, comma-concatenated.
    pub image_url: String,
    pub created_at: Timestamp,
}

/// DTO for persisting a submission once validation has passed.
#[derive(Debug)]
pub struct CreateWasteImage {
    pub user_id: DbId,
    pub level: i32,
    pub image_url: String,
}
