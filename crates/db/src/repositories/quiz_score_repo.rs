//! Repository for the `quiz_scores` table.

use ecosort_core::types::DbId;
use sqlx::PgPool;

use crate::models::quiz_score::QuizScore;

/// Provides the append-and-fold operation for quiz results.
pub struct QuizScoreRepo;

impl QuizScoreRepo {
    /// Append a quiz score event and fold it into the profile points
    /// total, in one transaction.
    ///
    /// Returns the event row and the updated points total, or `None`
    /// (rolling back the event insert) when the user has no profile row
    /// to fold into.
    pub async fn record(
        pool: &PgPool,
        user_id: DbId,
        score: i32,
    ) -> Result<Option<(QuizScore, i64)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let event = sqlx::query_as::<_, QuizScore>(
            "INSERT INTO quiz_scores (user_id, score)
             VALUES ($1, $2)
             RETURNING id, user_id, score, created_at",
        )
        .bind(user_id)
        .bind(score)
        .fetch_one(&mut *tx)
        .await?;

        let total: Option<(i64,)> = sqlx::query_as(
            "UPDATE user_profile SET points = points + $2
             WHERE user_id = $1
             RETURNING points",
        )
        .bind(user_id)
        .bind(score as i64)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((total,)) = total else {
            // No profile to fold into: drop the transaction, keeping the
            // event log and the points total consistent with each other.
            return Ok(None);
        };

        tx.commit().await?;
        Ok(Some((event, total)))
    }

    /// List a user's quiz history, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<QuizScore>, sqlx::Error> {
        sqlx::query_as::<_, QuizScore>(
            "SELECT id, user_id, score, created_at FROM quiz_scores
             WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
