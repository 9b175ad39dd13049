/**
 * API Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers and the
 * WebSocket handshake gate. Each variant maps to exactly one HTTP status
 * code, so the two surfaces reject a given failure the same way.
 *
 * # Credential Errors
 *
 * Credential failures are kept distinct so callers can tell them apart:
 * - `MissingCredential` - no token was presented (401)
 * - `MalformedCredential` - the Authorization header is not `Bearer <token>` (401)
 * - `ExpiredCredential` - the token signature is valid but past `exp` (401)
 * - `InvalidSignature` - the token is tampered or not a JWT at all (403)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::sessions::TokenError;

/// Errors that can be returned from any request handler
///
/// The `Display` strings double as the client-visible messages, so they are
/// worded for the client, not for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential was presented at all
    #[error("Authentication error - No token provided")]
    MissingCredential,

    /// The Authorization header is present but not in `Bearer <token>` form
    #[error("Authentication error - Invalid token format")]
    MalformedCredential,

    /// The token is well-formed and correctly signed, but expired
    #[error("Authentication error - Token expired")]
    ExpiredCredential,

    /// The token failed signature verification or is not a JWT
    #[error("Authentication error - Invalid token")]
    InvalidSignature,

    /// Login failed (unknown email or wrong password)
    #[error("{0}")]
    Unauthorized(String),

    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// The request conflicts with existing state (e.g. duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// The caller is authenticated but not allowed to do this
    #[error("{0}")]
    Forbidden(String),

    /// The database is not configured, so persistence-backed routes are off
    #[error("Database not configured")]
    Unavailable,

    /// A database query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should never reach the client in detail
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredential => StatusCode::UNAUTHORIZED,
            Self::MalformedCredential => StatusCode::UNAUTHORIZED,
            Self::ExpiredCredential => StatusCode::UNAUTHORIZED,
            Self::InvalidSignature => StatusCode::FORBIDDEN,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-visible error message
    ///
    /// Server-side failures collapse to a generic message; the detail
    /// stays in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => Self::MissingCredential,
            TokenError::Expired => Self::ExpiredCredential,
            TokenError::Invalid => Self::InvalidSignature,
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("bcrypt: {err}"))
    }
}
