/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and attaches the identity to the request.
 *
 * Missing header and expired token map to 401; a tampered or otherwise
 * invalid token maps to 403.
 */

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;

/// Authenticated user data extracted from the JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Attaches `AuthenticatedUser` to request extensions for handlers
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::MissingCredential
        })?;

    // Expected format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::MalformedCredential
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ApiError::from(e)
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::error!("Token sub is not a UUID: {}", claims.sub);
        ApiError::InvalidSignature
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to pull the `AuthenticatedUser` that the
/// middleware placed in request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingCredential
            })?;

        Ok(AuthUser(user))
    }
}
