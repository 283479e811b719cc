//! Gallery albums and their media

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::{AlbumId, MediaId};

use super::{ContentAppState, json_body, parse_id};
use crate::application::GalleryUseCase;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{AlbumRequest, DataResponse, MediaRequest};

/// GET /api/gallery
pub async fn list_albums<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let albums = GalleryUseCase::new(state.repo).list_albums().await?;
    Ok(Json(DataResponse::new(albums)))
}

/// GET /api/gallery/{id}
pub async fn get_album<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<impl IntoResponse> {
    let id: AlbumId = parse_id(&id)?;
    let album = GalleryUseCase::new(state.repo).get_album(&id).await?;
    Ok(Json(DataResponse::new(album)))
}

/// POST /api/admin/gallery
pub async fn create_album<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let album = GalleryUseCase::new(state.repo)
        .create_album(req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(album))))
}

/// PUT /api/admin/gallery/{id}
pub async fn update_album<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<AlbumRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let id: AlbumId = parse_id(&id)?;
    let req = json_body(payload)?;
    let album = GalleryUseCase::new(state.repo)
        .update_album(&id, req.into())
        .await?;
    Ok(Json(DataResponse::new(album)))
}

/// DELETE /api/admin/gallery/{id}
pub async fn delete_album<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: AlbumId = parse_id(&id)?;
    GalleryUseCase::new(state.repo).delete_album(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/gallery/{id}/media
pub async fn add_media<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<MediaRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let album_id: AlbumId = parse_id(&id)?;
    let req = json_body(payload)?;
    let media = GalleryUseCase::new(state.repo)
        .add_media(&album_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(media))))
}

/// DELETE /api/admin/gallery/media/{media_id}
pub async fn delete_media<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(media_id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: MediaId = parse_id(&media_id)?;
    GalleryUseCase::new(state.repo).delete_media(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
