/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response so handlers can return it with
 * `?`. Errors are serialized as `{"message": "..."}`, which is the field
 * clients read.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {:?}", self);
        }

        let body = serde_json::json!({ "message": message });
        (status, Json(body)).into_response()
    }
}
