/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Fields
 *
 * - `db_pool` - optional PostgreSQL pool; `None` when `DATABASE_URL` is
 *   not set, in which case persistence-backed routes answer 503
 * - `rooms` - the realtime room registry, owned here and scoped to the
 *   process lifetime
 *
 * Both fields are cheaply cloneable and thread-safe, so the whole state
 * is `Clone` and shared across handlers.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::ws::RoomRegistry;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when the database is not configured
    pub db_pool: Option<PgPool>,

    /// Per-user room membership for realtime fan-out
    pub rooms: RoomRegistry,
}

impl AppState {
    pub fn new(db_pool: Option<PgPool>) -> Self {
        Self {
            db_pool,
            rooms: RoomRegistry::new(),
        }
    }
}

/// Allow handlers to take `State<Option<PgPool>>` directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to take `State<RoomRegistry>` directly
impl FromRef<AppState> for RoomRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.rooms.clone()
    }
}
