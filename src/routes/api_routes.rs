/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - user registration
 * - `POST /api/auth/login` - user login
 *
 * ## Protected (bearer token required)
 * - `GET /api/auth/me` - current user
 * - `GET /api/users` - all users except the caller
 * - `PUT /api/users/profile` - update own profile
 * - `POST /api/messages` - persist a message
 * - `GET /api/messages/{user_id}` - conversation with a user
 * - `PUT /api/messages/like/{message_id}` - toggle a like
 * - `PUT /api/messages/{message_id}` - edit own message
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::{get_me, list_users, login, put_profile, signup};
use crate::messages::{get_messages, like_message, send_message, update_message};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Add the routes that require no credential
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
}

/// Add the routes protected by the bearer-token middleware
pub fn configure_protected_routes(router: Router<AppState>) -> Router<AppState> {
    // GET takes a user id (conversation partner), PUT a message id; the
    // path shape is shared so they register under one parameter name.
    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/users", get(list_users))
        .route("/api/users/profile", put(put_profile))
        .route("/api/messages", post(send_message))
        .route("/api/messages/{id}", get(get_messages).put(update_message))
        .route("/api/messages/like/{message_id}", put(like_message))
        .route_layer(middleware::from_fn(auth_middleware));

    router.merge(protected)
}
