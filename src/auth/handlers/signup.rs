/**
 * Signup Handler
 *
 * Implements user registration for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format, and password length
 * 2. Check for an existing user with the same username or email
 * 3. Hash the password using bcrypt
 * 4. Create the user
 * 5. Generate a JWT token and return it with the user info
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::error::ApiError;

/// Validate username format
///
/// Usernames must be 3-30 characters, start with a letter, and contain
/// only alphanumeric characters and underscores.
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email, or password
/// * `409 Conflict` - username or email already registered
/// * `503 Service Unavailable` - database not configured
pub async fn signup(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    if !is_valid_username(&request.username) {
        return Err(ApiError::Validation(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores".to_string(),
        ));
    }

    if !request.email.contains('@') {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    if request.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if get_user_by_username(&pool, &request.username).await?.is_some() {
        return Err(ApiError::Conflict("Username already taken".to_string()));
    }

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&pool, request.username, request.email, password_hash).await?;

    let token = create_token(user.id, user.email.clone())
        .map_err(|e| ApiError::Internal(format!("token generation failed: {e}")))?;

    tracing::info!("User created: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
