//! Messages Module
//!
//! Message persistence and CRUD handlers.
//!
//! - **`model`** - the `Message` struct (also the realtime payload shape)
//! - **`db`** - sqlx queries for the `messages` table
//! - **`handlers`** - HTTP handlers for the message endpoints

pub mod db;
pub mod handlers;
pub mod model;

pub use handlers::{get_messages, like_message, send_message, update_message};
pub use model::Message;
