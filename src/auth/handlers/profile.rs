/**
 * Profile Update Handler
 *
 * Implements PUT /api/users/profile: the authenticated user updates their
 * own username and email. Uniqueness is pre-checked the same way signup
 * does it.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{ProfileUpdateRequest, UserResponse};
use crate::auth::users::{get_user_by_email, get_user_by_username, update_profile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Profile update handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email format
/// * `409 Conflict` - username or email belongs to another user
/// * `503 Service Unavailable` - database not configured
pub async fn put_profile(
    State(pool): State<Option<PgPool>>,
    AuthUser(caller): AuthUser,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    if !request.email.contains('@') {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    if let Some(existing) = get_user_by_username(&pool, &request.username).await? {
        if existing.id != caller.user_id {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }
    }

    if let Some(existing) = get_user_by_email(&pool, &request.email).await? {
        if existing.id != caller.user_id {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }
    }

    let user = update_profile(&pool, caller.user_id, &request.username, &request.email).await?;

    tracing::info!("Profile updated for {}", user.id);
    Ok(Json(user.into()))
}
