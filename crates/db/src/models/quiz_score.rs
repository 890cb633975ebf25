//! Quiz score event model for the `quiz_scores` table.

use ecosort_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `quiz_scores` log.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuizScore {
    pub id: DbId,
    pub user_id: DbId,
    pub score: i32,
    pub created_at: Timestamp,
}
