/**
 * Message Model
 *
 * The persisted chat message. This struct is also the payload carried by
 * the realtime `new_message` event: the client persists over HTTP, gets
 * the stored row back, and emits it over the socket. The two paths share
 * one shape on purpose.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    /// Unique message ID (UUID)
    pub id: Uuid,
    /// Sender's user ID
    pub sender_id: Uuid,
    /// Receiver's user ID
    pub receiver_id: Uuid,
    /// Message text
    pub body: String,
    /// IDs of users who have liked this message
    pub liked_by: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Build an unsaved message with fresh ID and timestamps
    pub fn new(sender_id: Uuid, receiver_id: Uuid, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            body: body.into(),
            liked_by: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given user has liked this message
    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.liked_by.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message() {
        let sender = Uuid::new_v4();
        let receiver = Uuid::new_v4();
        let msg = Message::new(sender, receiver, "hi");

        assert_eq!(msg.sender_id, sender);
        assert_eq!(msg.receiver_id, receiver);
        assert_eq!(msg.body, "hi");
        assert!(msg.liked_by.is_empty());
    }

    #[test]
    fn test_is_liked_by() {
        let liker = Uuid::new_v4();
        let mut msg = Message::new(Uuid::new_v4(), Uuid::new_v4(), "hi");
        assert!(!msg.is_liked_by(liker));

        msg.liked_by.push(liker);
        assert!(msg.is_liked_by(liker));
    }

    #[test]
    fn test_serde_round_trip() {
        let msg = Message::new(Uuid::new_v4(), Uuid::new_v4(), "hello");
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
