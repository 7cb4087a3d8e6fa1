//! Request handlers, one module per resource.

use axum::{http::StatusCode, Json};
use tracing::error;

use crate::MessageResponse;

pub mod photos;

/// Status plus `{message}` body returned on any handler failure.
pub type HandlerError = (StatusCode, Json<MessageResponse>);

/// Log a database failure and hide its details from the client.
pub(crate) fn internal_error(context: &str, err: db::DbError) -> HandlerError {
    error!("{context}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::message("internal server error")),
    )
}
