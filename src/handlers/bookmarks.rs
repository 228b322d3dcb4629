//! Bookmark handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{decode_json, JsonBody};
use crate::model::Bookmark;
use crate::service::{BookmarkStore, CreateBookmarkBody, RequestValidator, UpdateBookmarkBody};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// Lookup stage shared by read, update and delete. An id that is not an
/// integer cannot match a row and resolves to not-found.
pub async fn resolve_bookmark(store: &dyn BookmarkStore, raw_id: &str) -> Result<Bookmark, AppError> {
    let found = match raw_id.parse::<i64>() {
        Ok(id) => store.get_by_id(id).await?,
        Err(_) => None,
    };
    found.ok_or_else(|| {
        tracing::error!(id = %raw_id, "Bookmark with id {} not found.", raw_id);
        AppError::NotFound
    })
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_all().await?;
    let data: Vec<Bookmark> = rows.iter().map(Bookmark::sanitized).collect();
    Ok((StatusCode::OK, Json(data)))
}

pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<CreateBookmarkBody>,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::validate_create(body)?;
    let created = state.store.create(&new).await?;
    tracing::info!(id = created.id, "Bookmark with id {} created.", created.id);
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.sanitized()),
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = resolve_bookmark(state.store.as_ref(), &id).await?;
    Ok((StatusCode::OK, Json(bookmark.sanitized())))
}

/// The body is decoded only after the id resolves, so an unknown id is a 404
/// whatever the body holds.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = resolve_bookmark(state.store.as_ref(), &id).await?;
    let body: UpdateBookmarkBody = decode_json(&body)?;
    let patch = RequestValidator::validate_update(body, state.rating_policy)?;
    state.store.update(bookmark.id, &patch).await?;
    tracing::info!(id = bookmark.id, "Bookmark with id {} updated.", bookmark.id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = resolve_bookmark(state.store.as_ref(), &id).await?;
    state.store.delete(bookmark.id).await?;
    tracing::info!(id = bookmark.id, "Bookmark with id {} deleted.", bookmark.id);
    Ok(StatusCode::NO_CONTENT)
}
