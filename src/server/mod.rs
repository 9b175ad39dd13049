//! Server Module
//!
//! Server setup: application state, configuration, and initialization.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - environment-driven database configuration
//! - **`init`** - `create_app`, the composition root

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
