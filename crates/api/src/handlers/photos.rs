use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use db::repository::photos as photo_repo;
use db::{NewPhoto, PhotoRow};

use super::{internal_error, HandlerError};
use crate::{AppState, MessageResponse};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PhotoRow>>, HandlerError> {
    match photo_repo::list_photos(&state.pool).await {
        Ok(photos) => Ok(Json(photos)),
        Err(e) => Err(internal_error("failed to list photos", e)),
    }
}

pub async fn list_by_collage(
    Path(collage_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PhotoRow>>, HandlerError> {
    match photo_repo::list_photos_by_collage(&state.pool, collage_id).await {
        Ok(photos) => Ok(Json(photos)),
        Err(e) => Err(internal_error("failed to list collage photos", e)),
    }
}

pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PhotoRow>, HandlerError> {
    match photo_repo::get_photo(&state.pool, id).await {
        Ok(Some(photo)) => Ok(Json(photo)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(MessageResponse::message(format!("photo {id} not found"))),
        )),
        Err(e) => Err(internal_error("failed to fetch photo", e)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewPhoto>,
) -> Result<(StatusCode, Json<MessageResponse>), HandlerError> {
    match photo_repo::insert_photo(&state.pool, &payload).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new(id, "Photo created successfully")),
        )),
        Err(e) => Err(internal_error("failed to insert photo", e)),
    }
}

/// Deleting a photo that does not exist still answers 200.
pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, HandlerError> {
    match photo_repo::delete_photo(&state.pool, id).await {
        Ok(true) => Ok(Json(MessageResponse::new(id, "Photo deleted successfully"))),
        Ok(false) => Ok(Json(MessageResponse::new(id, "No photo to delete"))),
        Err(e) => Err(internal_error("failed to delete photo", e)),
    }
}
