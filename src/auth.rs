//! Authentication Handler
//!
//! `POST /auth`: validate input, look the user up by email, compare the
//! password, and issue a signed token. Each stage terminates the request on
//! failure; nothing is retried, since neither validation errors nor
//! credential mismatches are transient, and store failures are surfaced
//! immediately for the caller to handle.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::crypto::constant_time_str_eq;
use crate::error::AppError;
use crate::server::AppState;

/// Credential payload, supplied per request and never persisted.
///
/// Absent fields deserialize to empty strings so that `{}` and
/// `{"email": ""}` both fail validation with the documented message instead
/// of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

/// Authenticate a user and issue an access token.
///
/// Outcomes:
/// - 400 `Email and password are required` - a field is missing or empty;
///   the store is not queried
/// - 401 `Invalid credentials` - unknown email or wrong password, with an
///   identical body for both so account existence is not leaked
/// - 500 `Server error` - store failure; the cause is logged, not returned
/// - 200 `{message, token}` - verified; token expires in one hour
pub async fn authenticate(
    State(state): State<AppState>,
    Json(input): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if input.email.is_empty() || input.password.is_empty() {
        return Err(AppError::bad_request("Email and password are required"));
    }

    let record = state.store.find_by_email(&input.email).await?;

    let user = match record {
        Some(user) if constant_time_str_eq(&user.password, &input.password) => user,
        _ => {
            warn!(event = "auth.failed", email = %input.email, "Authentication failed");
            return Err(AppError::unauthorized("Invalid credentials"));
        }
    };

    let token = state.tokens.issue(&user)?;

    info!(
        event = "auth.success",
        user_id = user.id,
        email = %user.email,
        "User authenticated"
    );

    Ok(Json(AuthResponse {
        message: "Authenticated".into(),
        token,
    }))
}
