/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and verification for user
 * sessions. Tokens are issued at login/signup, carried as a bearer token on
 * REST calls, and presented in the WebSocket handshake; both surfaces decode
 * to the same identity.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: 30 days
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Why a token failed verification
///
/// The three causes stay distinct so the HTTP middleware can map them to
/// different status codes while the WebSocket gate picks one rejection
/// message per cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No token was presented
    #[error("Authentication error - No token provided")]
    Missing,
    /// Signature checks out but the token is past its expiry
    #[error("Authentication error - Token expired")]
    Expired,
    /// Tampered, malformed, or signed with a different secret
    #[error("Authentication error - Invalid token")]
    Invalid,
}

/// Get JWT secret from environment
pub(crate) fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development default");
        "chatwire-dev-secret-change-in-production".to_string()
    })
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID)
/// * `email` - User email
///
/// # Returns
/// Signed JWT token string
pub fn create_token(user_id: Uuid, email: String) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token and return its claims
///
/// Distinguishes the three failure causes; the happy path returns the
/// decoded claims with the identity in `sub`.
pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    if token.is_empty() {
        return Err(TokenError::Missing);
    }

    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let validation = Validation::default();

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
}

/// Extract the user ID from a token
///
/// Convenience for call sites that only care about the identity claim.
pub fn identity_from_token(token: &str) -> Result<Uuid, TokenError> {
    let claims = verify_token(token)?;
    Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let email = "test@example.com".to_string();
        let token = create_token(user_id, email.clone()).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, email);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_identity_from_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();
        assert_eq!(identity_from_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_empty_token_is_missing() {
        assert_eq!(verify_token("").unwrap_err(), TokenError::Missing);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            verify_token("invalid.token.here").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let token = create_token(Uuid::new_v4(), "test@example.com".to_string()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert_eq!(verify_token(&tampered).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_expired_token_is_expired() {
        // Issue a token whose exp is far past, beyond the default leeway
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let key = EncodingKey::from_secret(jwt_secret().as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert_eq!(verify_token(&token).unwrap_err(), TokenError::Expired);
    }
}
