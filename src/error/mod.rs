//! API Error Module
//!
//! This module defines the error types returned by HTTP handlers and the
//! WebSocket handshake gate, along with their conversion to HTTP responses.
//!
//! # Module Structure
//!
//! - **`types`** - Error type definitions and status-code mapping
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
