/**
 * Authentication Handler Types
 *
 * Request and response types shared across the signup, login, profile,
 * and get_me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Profile update request
#[derive(Deserialize, Serialize, Debug)]
pub struct ProfileUpdateRequest {
    pub username: String,
    pub email: String,
}

/// Auth response
///
/// Returned by signup and login. Contains the JWT token the client carries
/// both as an HTTP bearer token and in the WebSocket handshake.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (30-day expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        }
    }
}
