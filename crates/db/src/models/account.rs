//! Account model for the `users` table.

use ecosort_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    /// Argon2id PHC string. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    /// Updated on every successful login.
    pub last_active_at: Timestamp,
}

/// DTO for creating a new account at signup.
#[derive(Debug, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
