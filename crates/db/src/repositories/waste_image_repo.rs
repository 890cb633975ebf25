//! Repository for the `waste_images` table.

use sqlx::PgPool;

use crate::models::waste_image::{CreateWasteImage, WasteImage};

/// Column list for waste_images queries.
const COLUMNS: &str = "id, user_id, level, image_url, created_at";

/// Provides the single append operation for validated submissions.
pub struct WasteImageRepo;

impl WasteImageRepo {
    /// Persist a fully validated submission, returning the stored row.
    pub async fn create(pool: &PgPool, input: &CreateWasteImage) -> Result<WasteImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO waste_images (user_id, level, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WasteImage>(&query)
            .bind(input.user_id)
            .bind(input.level)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }
}
