//! Repository for the `users` table.

use ecosort_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::{Account, CreateAccount};

/// Column list for users queries.
const COLUMNS: &str = "id, email, password_hash, role, last_active_at";

/// Provides account lookup and lifecycle operations.
pub struct AccountRepo;

impl AccountRepo {
    /// Create a new account, returning the created row.
    ///
    /// A duplicate email violates `uq_users_email` and surfaces as a
    /// database error for the central classifier to map.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Case-sensitive lookup by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Stamp `last_active_at` with the current time after a successful
    /// login, returning the updated row.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET last_active_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
