//! Site profile and home page slides

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::SlideId;

use super::{ContentAppState, json_body, parse_id};
use crate::application::SiteUseCase;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{DataResponse, ProfileRequest, SlideRequest};

/// GET /api/profile
pub async fn get_profile<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let profile = SiteUseCase::new(state.repo).profile().await?;
    Ok(Json(DataResponse::new(profile)))
}

/// PUT /api/admin/profile
pub async fn save_profile<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let profile = SiteUseCase::new(state.repo)
        .save_profile(req.into())
        .await?;
    Ok(Json(DataResponse::new(profile)))
}

/// GET /api/slides
pub async fn list_active_slides<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let slides = SiteUseCase::new(state.repo).list_slides(true).await?;
    Ok(Json(DataResponse::new(slides)))
}

/// GET /api/admin/slides
pub async fn list_all_slides<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let slides = SiteUseCase::new(state.repo).list_slides(false).await?;
    Ok(Json(DataResponse::new(slides)))
}

/// POST /api/admin/slides
pub async fn create_slide<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<SlideRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let slide = SiteUseCase::new(state.repo).create_slide(req.into()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(slide))))
}

/// GET /api/admin/slides/{id}
pub async fn get_slide<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<impl IntoResponse> {
    let id: SlideId = parse_id(&id)?;
    let slide = SiteUseCase::new(state.repo).get_slide(&id).await?;
    Ok(Json(DataResponse::new(slide)))
}

/// PUT /api/admin/slides/{id}
pub async fn update_slide<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<SlideRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let id: SlideId = parse_id(&id)?;
    let req = json_body(payload)?;
    let slide = SiteUseCase::new(state.repo)
        .update_slide(&id, req.into())
        .await?;
    Ok(Json(DataResponse::new(slide)))
}

/// DELETE /api/admin/slides/{id}
pub async fn delete_slide<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: SlideId = parse_id(&id)?;
    SiteUseCase::new(state.repo).delete_slide(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
