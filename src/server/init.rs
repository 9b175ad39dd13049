/**
 * Server Initialization
 *
 * Builds the application: state creation, database loading, router
 * configuration, and the periodic room-pruning task.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// How often empty rooms are swept out of the registry
const ROOM_PRUNE_INTERVAL_SECS: u64 = 300;

/// Create and configure the Axum application
///
/// 1. Loads the optional database pool
/// 2. Creates the shared state (pool + room registry)
/// 3. Configures all routes
/// 4. Spawns the periodic cleanup task that disposes empty rooms
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing chatwire server");

    let db_pool = load_database().await;
    let app_state = AppState::new(db_pool);

    let app = create_router(app_state.clone());

    // Rooms whose last connection dropped linger in the map until this
    // sweep removes them.
    let rooms = app_state.rooms.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(ROOM_PRUNE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            rooms.prune_empty();
            tracing::debug!("Pruned empty rooms; {} rooms live", rooms.room_count());
        }
    });

    tracing::info!("Router configured");
    app
}
