//! Chatwire
//!
//! A real-time chat backend: an HTTP API for registration, authentication,
//! and message CRUD backed by PostgreSQL, plus a token-gated WebSocket
//! layer that fans new-message, edit, and like events out to per-user
//! rooms.
//!
//! # Module Structure
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - router assembly
//! - **`auth`** - JWT sessions, user model, auth/user handlers
//! - **`middleware`** - bearer-token middleware and extractor
//! - **`messages`** - message model, queries, CRUD handlers
//! - **`ws`** - handshake gate, room registry, event router
//! - **`error`** - error taxonomy and HTTP conversion
//!
//! # Flow
//!
//! Clients authenticate over HTTP, receive a JWT, then open a WebSocket
//! presenting that token; on success the connection joins the room named
//! by its identity and receives every event targeted at that identity,
//! on every device simultaneously.

pub mod auth;
pub mod error;
pub mod messages;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod ws;

pub use error::ApiError;
pub use server::{create_app, AppState};
