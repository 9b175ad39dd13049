/**
 * WebSocket Gateway
 *
 * The credential-gated entry point for realtime connections:
 *
 * 1. The client requests GET /ws?token=<jwt> with the same token it uses
 *    as an HTTP bearer credential.
 * 2. The gate verifies the token *before* completing the upgrade; each
 *    failure cause gets its own status and message.
 * 3. On success the connection joins the room named by its identity and
 *    enters the read loop: Connecting -> Authenticated/Joined ->
 *    Disconnected (terminal). A reconnect starts over; there is no
 *    resume or backlog replay.
 *
 * Malformed inbound frames are logged and dropped; they never close the
 * connection or crash the process.
 */

use axum::{
    extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::sessions::{identity_from_token, TokenError};
use crate::server::state::AppState;
use crate::ws::events::ClientEvent;
use crate::ws::router::route_event;

/// Query parameters for the WebSocket upgrade request
#[derive(Debug, Deserialize)]
pub struct WsAuthParams {
    pub token: Option<String>,
}

/// Verify the handshake credential
///
/// Maps each failure cause to the status and message the upgrade is
/// rejected with: missing and expired are 401, invalid is 403.
pub fn gate_token(token: Option<&str>) -> Result<Uuid, (StatusCode, String)> {
    let token = token.unwrap_or("");

    identity_from_token(token).map_err(|e| {
        let status = match e {
            TokenError::Missing | TokenError::Expired => StatusCode::UNAUTHORIZED,
            TokenError::Invalid => StatusCode::FORBIDDEN,
        };
        (status, e.to_string())
    })
}

/// WebSocket upgrade handler (GET /ws)
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(params): Query<WsAuthParams>,
    ws: WebSocketUpgrade,
) -> Response {
    let identity = match gate_token(params.token.as_deref()) {
        Ok(identity) => identity,
        Err((status, message)) => {
            tracing::warn!("WebSocket handshake rejected: {}", message);
            return (status, message).into_response();
        }
    };

    ws.on_upgrade(move |socket| handle_connection(socket, state, identity))
}

/// Run one authenticated connection until it disconnects
async fn handle_connection(socket: WebSocket, state: AppState, identity: Uuid) {
    tracing::info!("WebSocket connected for {}", identity);

    // Join the identity's own room; membership lasts exactly as long as
    // this task holds the receiver.
    let mut room_rx = state.rooms.join(identity);

    let (mut ws_sender, mut ws_receiver) = socket.split();

    // Forward room fan-out to this connection
    let send_task = tokio::spawn(async move {
        loop {
            match room_rx.recv().await {
                Ok(event) => {
                    let json = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!("Failed to serialize event: {}", e);
                            continue;
                        }
                    };
                    if ws_sender.send(WsMessage::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    // Best-effort delivery: a slow client just misses events
                    tracing::warn!("Connection lagged, skipped {} events", skipped);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Read loop: route inbound events until the client goes away
    while let Some(result) = ws_receiver.next().await {
        let frame = match result {
            Ok(frame) => frame,
            Err(e) => {
                tracing::debug!("WebSocket transport error for {}: {}", identity, e);
                break;
            }
        };

        match frame {
            WsMessage::Text(text) => {
                let event: ClientEvent = match serde_json::from_str(&text) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!("Dropping malformed event from {}: {}", identity, e);
                        continue;
                    }
                };
                route_event(&state.rooms, identity, event);
            }
            WsMessage::Close(_) => break,
            // Pings are answered by axum automatically
            _ => {}
        }
    }

    // Dropping the receiver (via the aborted task) removes this connection
    // from its room; there is no explicit leave.
    send_task.abort();
    tracing::info!("WebSocket disconnected for {}", identity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::{create_token, jwt_secret, unix_now, Claims};
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn test_gate_accepts_valid_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();

        assert_eq!(gate_token(Some(&token)).unwrap(), user_id);
    }

    #[test]
    fn test_gate_rejects_missing_token() {
        let (status, message) = gate_token(None).unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Authentication error - No token provided");
    }

    #[test]
    fn test_gate_rejects_invalid_token() {
        let (status, message) = gate_token(Some("not.a.token")).unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(message, "Authentication error - Invalid token");
    }

    #[test]
    fn test_gate_rejects_expired_token() {
        // Issue a token whose exp is far past, beyond the default leeway
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let key = EncodingKey::from_secret(jwt_secret().as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let (status, message) = gate_token(Some(&token)).unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Authentication error - Token expired");
    }
}
