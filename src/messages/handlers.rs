/**
 * Message HTTP Handlers
 *
 * CRUD handlers for messages:
 *
 * - `POST /api/messages` - persist a new message from the caller
 * - `GET /api/messages/{user_id}` - conversation between caller and user
 * - `PUT /api/messages/like/{message_id}` - toggle the caller's like
 * - `PUT /api/messages/{message_id}` - edit the caller's own message
 *
 * These handlers only touch storage. Realtime delivery to open sockets is
 * the client's job: after a successful call it emits the corresponding
 * socket event, which the ws layer fans out. There is no transactional
 * link between the two paths.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::messages::db;
use crate::messages::model::Message;
use crate::middleware::auth::AuthUser;

/// Body for POST /api/messages
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    pub body: String,
}

/// Body for PUT /api/messages/{message_id}
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub body: String,
}

/// Persist a new message from the authenticated sender
pub async fn send_message(
    State(pool): State<Option<PgPool>>,
    AuthUser(caller): AuthUser,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    if request.body.trim().is_empty() {
        return Err(ApiError::Validation(
            "Message body cannot be empty".to_string(),
        ));
    }

    let message =
        db::create_message(&pool, caller.user_id, request.receiver_id, &request.body).await?;

    tracing::debug!(
        "Message {} stored ({} -> {})",
        message.id,
        message.sender_id,
        message.receiver_id
    );

    Ok(Json(message))
}

/// Get the conversation between the caller and another user
pub async fn get_messages(
    State(pool): State<Option<PgPool>>,
    AuthUser(caller): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    let messages = db::get_conversation(&pool, caller.user_id, user_id).await?;
    Ok(Json(messages))
}

/// Toggle the caller's like on a message
pub async fn like_message(
    State(pool): State<Option<PgPool>>,
    AuthUser(caller): AuthUser,
    Path(message_id): Path<Uuid>,
) -> Result<Json<Message>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    let message = db::toggle_like(&pool, message_id, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Message not found".to_string()))?;

    Ok(Json(message))
}

/// Edit the body of the caller's own message
pub async fn update_message(
    State(pool): State<Option<PgPool>>,
    AuthUser(caller): AuthUser,
    Path(message_id): Path<Uuid>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let pool = pool.ok_or(ApiError::Unavailable)?;

    if request.body.trim().is_empty() {
        return Err(ApiError::Validation(
            "Message body cannot be empty".to_string(),
        ));
    }

    let existing = db::get_message_by_id(&pool, message_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Message not found".to_string()))?;

    if existing.sender_id != caller.user_id {
        return Err(ApiError::Forbidden(
            "Only the sender can edit a message".to_string(),
        ));
    }

    let message = db::update_body(&pool, message_id, &request.body).await?;
    Ok(Json(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_message_no_database() {
        let request = SendMessageRequest {
            receiver_id: Uuid::new_v4(),
            body: "hi".to_string(),
        };
        let caller = crate::middleware::auth::AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
        };

        let result = send_message(State(None), AuthUser(caller), Json(request)).await;
        assert!(matches!(result.unwrap_err(), ApiError::Unavailable));
    }
}
