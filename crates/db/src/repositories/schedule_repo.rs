//! Repository for the `scheduling` table.

use chrono::NaiveDate;
use ecosort_core::scheduling::{STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};
use ecosort_core::types::DbId;
use sqlx::PgPool;

use crate::models::schedule::{CreateSchedule, Schedule};

/// Column list for scheduling queries.
const COLUMNS: &str = "id, company_id, user_id, date, time, status, reason, created_at";

/// Provides schedule creation, listing, and the two terminal transitions.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Create a pending schedule request, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSchedule) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO scheduling (company_id, user_id, date, time, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(input.company_id)
            .bind(input.user_id)
            .bind(input.date)
            .bind(input.time)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// List all schedules where the given account is the requesting user.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scheduling
             WHERE user_id = $1
             ORDER BY date, time"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all schedules addressed to the given company.
    pub async fn list_for_company(pool: &PgPool, company_id: DbId) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scheduling
             WHERE company_id = $1
             ORDER BY date, time"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Transition `pending -> accepted` and credit a visit to both
    /// parties, in one transaction.
    ///
    /// The update is guarded by the full `(id, company_id, user_id)`
    /// triple plus the pending status, so an already-transitioned row (or
    /// a mismatched party) matches nothing and returns `None` with no
    /// side effects.
    pub async fn accept(
        pool: &PgPool,
        id: DbId,
        company_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE scheduling SET status = $4
             WHERE id = $1 AND company_id = $2 AND user_id = $3 AND status = $5
             RETURNING {COLUMNS}"
        );
        let schedule = sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(company_id)
            .bind(user_id)
            .bind(STATUS_ACCEPTED)
            .bind(STATUS_PENDING)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(schedule) = schedule else {
            return Ok(None);
        };

        sqlx::query("UPDATE user_profile SET visit = visit + 1 WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE company_profile SET visit = visit + 1 WHERE user_id = $1")
            .bind(company_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(schedule))
    }

    /// Transition `pending -> rejected`, recording the reason and
    /// rewriting the date as a counter-proposal.
    ///
    /// Same zero-rows-means-not-found guard as [`ScheduleRepo::accept`].
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        company_id: DbId,
        user_id: DbId,
        reason: &str,
        date: NaiveDate,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE scheduling SET status = $4, reason = $5, date = $6
             WHERE id = $1 AND company_id = $2 AND user_id = $3 AND status = $7
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(company_id)
            .bind(user_id)
            .bind(STATUS_REJECTED)
            .bind(reason)
            .bind(date)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }
}
