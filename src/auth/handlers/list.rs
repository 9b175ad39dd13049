/**
 * User Listing Handler
 *
 * Implements GET /api/users: every registered user except the caller,
 * used by the client to populate the conversation sidebar.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::list_users_except;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// List users handler
pub async fn list_users(
    State(pool): State<Option<PgPool>>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    let users = list_users_except(&pool, caller.user_id).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
