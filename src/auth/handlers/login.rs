/**
 * Login Handler
 *
 * Implements user authentication for POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password return the same 401 so callers
 *   cannot enumerate accounts
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - database not configured
pub async fn login(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;
    tracing::info!("Login request for: {}", request.email);

    // Same error for an unknown user and a wrong password
    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            invalid_credentials()
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(invalid_credentials());
    }

    let token = create_token(user.id, user.email.clone())
        .map_err(|e| ApiError::Internal(format!("token generation failed: {e}")))?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid email or password".to_string())
}
