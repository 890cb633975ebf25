//! Handlers for signup and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use ecosort_core::credentials::validate_signup_password;
use ecosort_core::error::CoreError;
use ecosort_core::types::{DbId, Timestamp};
use ecosort_db::models::account::CreateAccount;
use ecosort_db::repositories::AccountRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public account info embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    pub user_id: DbId,
    pub email: String,
    pub role: String,
}

/// Response body for a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: AccountInfo,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: AccountInfo,
    /// The previous activity timestamp, i.e. when this account last
    /// logged in before now.
    pub last_login: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Create an account. The password must be at least 8 characters and
/// match its confirmation; a duplicate email maps to 409 via the central
/// unique-violation classifier.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let email = require_text(input.email, "email")?;
    let password = require_text(input.password, "password")?;
    let confirm = require_text(input.confirm_password, "confirmPassword")?;
    let role = require_text(input.role, "role")?;

    validate_signup_password(&password, &confirm)?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            email,
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(user_id = account.id, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Signup successful",
            user: AccountInfo {
                user_id: account.id,
                email: account.email,
                role: account.role,
            },
        }),
    ))
}

/// POST /login
///
/// Check credentials against the stored digest. Success stamps
/// `last_active_at`; failure returns a single undifferentiated 401 so a
/// caller cannot distinguish an unknown email from a wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = require_text(input.email, "email")?;
    let password = require_text(input.password, "password")?;

    let account = AccountRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // The pre-update timestamp is what the caller sees as "last login".
    let last_login = account.last_active_at;

    AccountRepo::record_login(&state.pool, account.id).await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        user: AccountInfo {
            user_id: account.id,
            email: account.email,
            role: account.role,
        },
        last_login,
    }))
}
