//! Database operations for messages
//!
//! Hand-written sqlx queries for the `messages` table. Persistence here is
//! best-effort insert/update only; realtime delivery happens separately over
//! the socket layer with no transactional link between the two.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::messages::model::Message;

/// Insert a new message
pub async fn create_message(
    pool: &PgPool,
    sender_id: Uuid,
    receiver_id: Uuid,
    body: &str,
) -> Result<Message, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (id, sender_id, receiver_id, body, liked_by, created_at, updated_at)
        VALUES ($1, $2, $3, $4, '{}', $5, $6)
        RETURNING id, sender_id, receiver_id, body, liked_by, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(receiver_id)
    .bind(body)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get the conversation between two users, oldest first
pub async fn get_conversation(
    pool: &PgPool,
    user_a: Uuid,
    user_b: Uuid,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, receiver_id, body, liked_by, created_at, updated_at
        FROM messages
        WHERE (sender_id = $1 AND receiver_id = $2)
           OR (sender_id = $2 AND receiver_id = $1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_a)
    .bind(user_b)
    .fetch_all(pool)
    .await
}

/// Get a message by ID
pub async fn get_message_by_id(
    pool: &PgPool,
    message_id: Uuid,
) -> Result<Option<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, receiver_id, body, liked_by, created_at, updated_at
        FROM messages
        WHERE id = $1
        "#,
    )
    .bind(message_id)
    .fetch_optional(pool)
    .await
}

/// Toggle a user's like on a message
///
/// Returns `None` when the message does not exist. Read-then-write; no
/// atomicity guarantee for concurrent likes on the same message.
pub async fn toggle_like(
    pool: &PgPool,
    message_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Message>, sqlx::Error> {
    let Some(message) = get_message_by_id(pool, message_id).await? else {
        return Ok(None);
    };

    let mut liked_by = message.liked_by;
    if let Some(pos) = liked_by.iter().position(|id| *id == user_id) {
        liked_by.remove(pos);
    } else {
        liked_by.push(user_id);
    }

    let updated = sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET liked_by = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, sender_id, receiver_id, body, liked_by, created_at, updated_at
        "#,
    )
    .bind(&liked_by)
    .bind(Utc::now())
    .bind(message_id)
    .fetch_one(pool)
    .await?;

    Ok(Some(updated))
}

/// Update a message's body
pub async fn update_body(
    pool: &PgPool,
    message_id: Uuid,
    body: &str,
) -> Result<Message, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        UPDATE messages
        SET body = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, sender_id, receiver_id, body, liked_by, created_at, updated_at
        "#,
    )
    .bind(body)
    .bind(Utc::now())
    .bind(message_id)
    .fetch_one(pool)
    .await
}
