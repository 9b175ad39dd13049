/**
 * Get Current User Handler
 *
 * Implements GET /api/auth/me, which returns the user identified by the
 * bearer token. The auth middleware has already verified the token and
 * attached the identity, so this handler only fetches the record.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401/403` - missing or bad token (rejected in middleware)
/// * `404 Not Found` - the token's user no longer exists
/// * `503 Service Unavailable` - database not configured
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    let user = crate::auth::users::get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
