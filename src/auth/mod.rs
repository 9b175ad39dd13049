//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! management. It provides HTTP handlers for the auth and user endpoints
//! and manages user data and JWT tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration
//!     ├── login.rs    - User authentication
//!     ├── me.rs       - Get current user
//!     ├── list.rs     - List users
//!     └── profile.rs  - Profile update
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username/email/password → user created → JWT token returned
//! 2. **Login**: email/password → credentials verified → JWT token returned
//! 3. The token is then carried as `Authorization: Bearer <token>` on REST
//!    calls and as the `token` query parameter on the WebSocket handshake;
//!    both surfaces decode to the same identity.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are stateless and expire after 30 days
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, list_users, login, put_profile, signup};
pub use sessions::{create_token, identity_from_token, verify_token, Claims, TokenError};
