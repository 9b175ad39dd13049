/**
 * Room Registry
 *
 * Maps an authenticated identity to its room: a broadcast channel that
 * every live connection for that user subscribes to. The room name is the
 * identity; there is no other grouping key.
 *
 * # Membership
 *
 * - `join` get-or-creates the user's channel and subscribes, so multiple
 *   simultaneous connections (multi-tab, multi-device) all receive
 *   identical fan-out.
 * - Disconnect is just dropping the receiver; there is no explicit leave.
 * - `emit` to a room with no live subscribers is a silent no-op.
 * - Rooms with no subscribers are disposed by the periodic `prune_empty`
 *   pass; membership is purely in-memory and resets on process restart.
 *
 * # Thread Safety
 *
 * The map is behind a `std::sync::Mutex` (held only for map lookups, never
 * across an await); the channels themselves are `tokio::sync::broadcast`
 * and thread-safe.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::ws::events::ServerEvent;

/// Per-room channel capacity. A slow client that falls this far behind
/// starts missing events (RecvError::Lagged), which is acceptable for
/// best-effort delivery.
const ROOM_CAPACITY: usize = 256;

/// Registry of per-user rooms. Cloneable; stored in `AppState`.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<Mutex<HashMap<Uuid, broadcast::Sender<ServerEvent>>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Join the room for `user_id` and return a receiver for its events
    ///
    /// The room is created implicitly on first join.
    pub fn join(&self, user_id: Uuid) -> broadcast::Receiver<ServerEvent> {
        let mut rooms = self.rooms.lock().expect("room registry lock poisoned");
        rooms
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(ROOM_CAPACITY).0)
            .subscribe()
    }

    /// Deliver an event to every live connection in the user's room
    ///
    /// Returns the number of connections that received it; an empty or
    /// missing room yields 0 without error.
    pub fn emit(&self, user_id: Uuid, event: ServerEvent) -> usize {
        let sender = {
            let rooms = self.rooms.lock().expect("room registry lock poisoned");
            rooms.get(&user_id).cloned()
        };

        match sender {
            Some(tx) => tx.send(event).unwrap_or(0),
            None => 0,
        }
    }

    /// Number of live connections in the user's room
    pub fn member_count(&self, user_id: Uuid) -> usize {
        let rooms = self.rooms.lock().expect("room registry lock poisoned");
        rooms.get(&user_id).map_or(0, |tx| tx.receiver_count())
    }

    /// Drop rooms that no longer have any subscribers
    pub fn prune_empty(&self) {
        let mut rooms = self.rooms.lock().expect("room registry lock poisoned");
        rooms.retain(|_, tx| tx.receiver_count() > 0);
    }

    /// Number of rooms currently tracked (pruned or not yet pruned)
    pub fn room_count(&self) -> usize {
        self.rooms.lock().expect("room registry lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Message;

    fn sample_event() -> ServerEvent {
        ServerEvent::NewMessage(Message::new(Uuid::new_v4(), Uuid::new_v4(), "hi"))
    }

    #[tokio::test]
    async fn test_join_creates_room() {
        let registry = RoomRegistry::new();
        let user = Uuid::new_v4();

        let _rx = registry.join(user);
        assert_eq!(registry.member_count(user), 1);
        assert_eq!(registry.room_count(), 1);
    }

    #[tokio::test]
    async fn test_emit_reaches_all_connections_of_one_user() {
        let registry = RoomRegistry::new();
        let user = Uuid::new_v4();

        // Two devices for the same identity
        let mut rx1 = registry.join(user);
        let mut rx2 = registry.join(user);

        let event = sample_event();
        assert_eq!(registry.emit(user, event.clone()), 2);

        assert_eq!(rx1.recv().await.unwrap(), event);
        assert_eq!(rx2.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_emit_to_empty_room_is_noop() {
        let registry = RoomRegistry::new();
        assert_eq!(registry.emit(Uuid::new_v4(), sample_event()), 0);
    }

    #[tokio::test]
    async fn test_rooms_are_isolated() {
        let registry = RoomRegistry::new();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        let mut rx1 = registry.join(u1);
        let mut rx2 = registry.join(u2);

        registry.emit(u1, sample_event());

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disconnect_then_reconnect() {
        let registry = RoomRegistry::new();
        let user = Uuid::new_v4();

        let rx = registry.join(user);
        drop(rx);
        assert_eq!(registry.member_count(user), 0);

        // Old connection gone; a fresh join re-establishes membership
        let mut rx = registry.join(user);
        assert_eq!(registry.member_count(user), 1);
        assert_eq!(registry.emit(user, sample_event()), 1);
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_prune_empty_disposes_dead_rooms() {
        let registry = RoomRegistry::new();
        let user = Uuid::new_v4();

        let rx = registry.join(user);
        drop(rx);
        assert_eq!(registry.room_count(), 1);

        registry.prune_empty();
        assert_eq!(registry.room_count(), 0);
    }
}
