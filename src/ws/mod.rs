//! Realtime Delivery Module
//!
//! The authenticated realtime layer: token-gated WebSocket connections,
//! per-user room membership, and event fan-out to the one or two rooms a
//! given event targets.
//!
//! # Module Structure
//!
//! ```text
//! ws/
//! ├── events.rs   - wire event types (client -> server, server -> client)
//! ├── registry.rs - per-user room membership (RoomRegistry)
//! ├── router.rs   - inbound event validation and fan-out
//! └── gateway.rs  - handshake gate and connection lifecycle
//! ```
//!
//! # Design
//!
//! A room is a `tokio::sync::broadcast` channel keyed by user ID; every
//! live connection for that user holds a receiver. Fan-out is a `send` on
//! the target rooms: at-most-once, best-effort, no queueing, no
//! acknowledgment, no ordering guarantee across rooms. The registry is an
//! owned object in `AppState`, not a global.

pub mod events;
pub mod gateway;
pub mod registry;
pub mod router;

pub use events::{ClientEvent, ServerEvent};
pub use gateway::ws_handler;
pub use registry::RoomRegistry;
pub use router::route_event;
