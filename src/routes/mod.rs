//! Route Configuration
//!
//! - **`router`** - full router assembly (welcome, ws, API, CORS, fallback)
//! - **`api_routes`** - public and protected API route groups

pub mod api_routes;
pub mod router;

pub use router::create_router;
