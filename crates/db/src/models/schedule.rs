//! Pickup schedule model for the `scheduling` table.

use chrono::{NaiveDate, NaiveTime};
use ecosort_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `scheduling` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Schedule {
    pub id: DbId,
    pub company_id: DbId,
    pub user_id: DbId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// `pending`, `accepted`, or `rejected`.
    pub status: String,
    /// Set only when the company rejects with a counter-proposal.
    pub reason: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a pending schedule request.
#[derive(Debug, Deserialize)]
pub struct CreateSchedule {
    pub company_id: DbId,
    pub user_id: DbId,
    pub date: NaiveDate,
    pub time: NaiveTime,
}
