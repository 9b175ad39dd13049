/**
 * Realtime Wire Events
 *
 * Event types exchanged over the WebSocket, serialized as tagged JSON
 * text frames:
 *
 * ```json
 * {"event": "send_message", "data": { ... }}
 * ```
 *
 * Inbound (client -> server): `send_message`, `message_update`,
 * `message_like`. Outbound (server -> client): `new_message`,
 * `message_updated`.
 *
 * `message_updated` always carries `{message_id, updates}` regardless of
 * which inbound event produced it; the like path serializes the full liked
 * message as the `updates` value. Delivery events are ephemeral: they are
 * constructed, fanned out, and discarded, never persisted by this layer.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::messages::Message;

/// Events a client may send over the socket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// A newly persisted message to deliver to both participants
    SendMessage(Message),
    /// An edit to an existing message
    MessageUpdate {
        message_id: Uuid,
        receiver_id: Uuid,
        updates: Value,
    },
    /// A like toggle, carrying the full updated message
    MessageLike {
        sender_id: Uuid,
        receiver_id: Uuid,
        message: Message,
    },
}

/// Events the server delivers to room members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A new message for a conversation this user is part of
    NewMessage(Message),
    /// A message changed (edit or like)
    MessageUpdated { message_id: Uuid, updates: Value },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_event_wire_format() {
        let message = Message::new(Uuid::new_v4(), Uuid::new_v4(), "hi");
        let event = ClientEvent::SendMessage(message.clone());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "send_message");
        assert_eq!(json["data"]["body"], "hi");

        let back: ClientEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_server_event_wire_format() {
        let message_id = Uuid::new_v4();
        let event = ServerEvent::MessageUpdated {
            message_id,
            updates: serde_json::json!({"body": "edited"}),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "message_updated");
        assert_eq!(json["data"]["message_id"], message_id.to_string());
        assert_eq!(json["data"]["updates"]["body"], "edited");
    }

    #[test]
    fn test_unknown_event_rejected() {
        let raw = r#"{"event": "shutdown_server", "data": {}}"#;
        assert!(serde_json::from_str::<ClientEvent>(raw).is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        // message_update without receiver_id
        let raw = r#"{"event": "message_update", "data": {"message_id": "c6f7a2bc-4f10-4f6a-9e26-7a2b9e26aa01", "updates": {}}}"#;
        assert!(serde_json::from_str::<ClientEvent>(raw).is_err());
    }
}
