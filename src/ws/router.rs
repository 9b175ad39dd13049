/**
 * Event Router
 *
 * Receives inbound events from an authenticated connection and fans them
 * out to the rooms of the relevant recipients.
 *
 * # Delivery Semantics
 *
 * - At-most-once, best-effort: an empty target room drops the event
 *   silently, and partial delivery (sender live, receiver offline) is
 *   expected, not a failure.
 * - No deduplication: routing the same event twice emits twice.
 * - No ordering guarantee across rooms beyond the order events are
 *   routed into a single room.
 *
 * # Sender Authorization
 *
 * The router checks the payload's claimed sender against the connection's
 * verified identity and drops mismatches with a warning. Receiver ids in
 * the payload are trusted as addressed.
 */

use uuid::Uuid;

use crate::ws::events::{ClientEvent, ServerEvent};
use crate::ws::registry::RoomRegistry;

/// Route one inbound event from the connection owned by `identity`
///
/// Returns the total number of connections the event was delivered to.
/// Malformed or unauthorized events deliver to nobody; they never fail
/// the connection.
pub fn route_event(rooms: &RoomRegistry, identity: Uuid, event: ClientEvent) -> usize {
    match event {
        ClientEvent::SendMessage(message) => {
            if message.sender_id != identity {
                tracing::warn!(
                    "Dropping send_message: claimed sender {} != connection identity {}",
                    message.sender_id,
                    identity
                );
                return 0;
            }

            let receiver_id = message.receiver_id;
            let out = ServerEvent::NewMessage(message);
            deliver(rooms, identity, receiver_id, out)
        }
        ClientEvent::MessageUpdate {
            message_id,
            receiver_id,
            updates,
        } => {
            // Targets the connection's own room plus the receiver's;
            // the sender id is implied by the connection itself.
            let out = ServerEvent::MessageUpdated {
                message_id,
                updates,
            };
            deliver(rooms, identity, receiver_id, out)
        }
        ClientEvent::MessageLike {
            sender_id,
            receiver_id,
            message,
        } => {
            if sender_id != identity {
                tracing::warn!(
                    "Dropping message_like: claimed sender {} != connection identity {}",
                    sender_id,
                    identity
                );
                return 0;
            }

            // Normalized to the message_updated shape: the full liked
            // message rides in `updates`.
            let updates = match serde_json::to_value(&message) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Dropping message_like: unserializable payload: {}", e);
                    return 0;
                }
            };

            let out = ServerEvent::MessageUpdated {
                message_id: message.id,
                updates,
            };
            deliver(rooms, identity, receiver_id, out)
        }
    }
}

/// Emit to the sender's and receiver's rooms
///
/// A self-message (sender == receiver) is delivered once, not twice.
fn deliver(rooms: &RoomRegistry, sender: Uuid, receiver: Uuid, event: ServerEvent) -> usize {
    let mut delivered = rooms.emit(sender, event.clone());
    if receiver != sender {
        delivered += rooms.emit(receiver, event);
    }

    if delivered == 0 {
        tracing::debug!("No live connections for event targets; dropped");
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Message;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_send_message_reaches_both_rooms_and_nobody_else() {
        let rooms = RoomRegistry::new();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let u3 = Uuid::new_v4();

        let mut rx_x = rooms.join(u1);
        let mut rx_y = rooms.join(u2);
        let mut rx_z = rooms.join(u3);

        let message = Message::new(u1, u2, "hi");
        let delivered = route_event(&rooms, u1, ClientEvent::SendMessage(message.clone()));
        assert_eq!(delivered, 2);

        let expected = ServerEvent::NewMessage(message);
        assert_eq!(rx_x.try_recv().unwrap(), expected);
        assert_eq!(rx_y.try_recv().unwrap(), expected);
        assert!(rx_z.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_partial_delivery_when_receiver_offline() {
        let rooms = RoomRegistry::new();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        let mut rx_x = rooms.join(u1);
        // u2 never connects

        let message = Message::new(u1, u2, "hi");
        let delivered = route_event(&rooms, u1, ClientEvent::SendMessage(message));

        assert_eq!(delivered, 1);
        assert!(rx_x.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_message_update_no_dedup() {
        let rooms = RoomRegistry::new();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        let _keep_u1 = rooms.join(u1);
        let mut rx_y = rooms.join(u2);

        let message_id = Uuid::new_v4();
        let event = ClientEvent::MessageUpdate {
            message_id,
            receiver_id: u2,
            updates: serde_json::json!({"body": "edited"}),
        };

        route_event(&rooms, u1, event.clone());
        route_event(&rooms, u1, event);

        // Two identical emissions, no hidden dedup
        let first = rx_y.try_recv().unwrap();
        let second = rx_y.try_recv().unwrap();
        assert_eq!(first, second);
        assert!(rx_y.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_message_like_normalized_to_message_updated() {
        let rooms = RoomRegistry::new();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        let mut rx_y = rooms.join(u2);

        let mut message = Message::new(u1, u2, "hi");
        message.liked_by.push(u2);

        let event = ClientEvent::MessageLike {
            sender_id: u1,
            receiver_id: u2,
            message: message.clone(),
        };
        route_event(&rooms, u1, event);

        match rx_y.try_recv().unwrap() {
            ServerEvent::MessageUpdated {
                message_id,
                updates,
            } => {
                assert_eq!(message_id, message.id);
                assert_eq!(updates, serde_json::to_value(&message).unwrap());
            }
            other => panic!("expected message_updated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spoofed_sender_is_dropped() {
        let rooms = RoomRegistry::new();
        let attacker = Uuid::new_v4();
        let victim = Uuid::new_v4();
        let target = Uuid::new_v4();

        let mut rx_victim = rooms.join(victim);
        let mut rx_target = rooms.join(target);

        // Connection authenticated as `attacker` claims to be `victim`
        let message = Message::new(victim, target, "spoofed");
        let delivered = route_event(&rooms, attacker, ClientEvent::SendMessage(message));

        assert_eq!(delivered, 0);
        assert!(rx_victim.try_recv().is_err());
        assert!(rx_target.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_self_message_delivered_once() {
        let rooms = RoomRegistry::new();
        let u1 = Uuid::new_v4();

        let mut rx = rooms.join(u1);

        let message = Message::new(u1, u1, "note to self");
        let delivered = route_event(&rooms, u1, ClientEvent::SendMessage(message));

        assert_eq!(delivered, 1);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
