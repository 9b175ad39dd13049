/**
 * Router Configuration
 *
 * Assembles the full Axum router:
 *
 * 1. Root welcome route (health check)
 * 2. WebSocket gateway at /ws (does its own token gate in the handshake)
 * 3. Public auth routes (signup, login)
 * 4. Protected API routes behind the bearer-token middleware
 * 5. Permissive CORS for browser clients
 */

use axum::{
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::{configure_protected_routes, configure_public_routes};
use crate::server::state::AppState;
use crate::ws::ws_handler;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(welcome))
        .route("/ws", get(ws_handler));

    let router = configure_public_routes(router);
    let router = configure_protected_routes(router);

    router
        .fallback(|| async { "404 Not Found" })
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Default route (GET /)
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Chatwire API" }))
}
