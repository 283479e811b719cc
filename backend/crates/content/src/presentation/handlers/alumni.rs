//! Alumni directory

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::AlumnusId;

use super::{ContentAppState, json_body, parse_id, query};
use crate::application::AlumniUseCase;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{AlumniQuery, AlumnusRequest, DataResponse};

/// GET /api/alumni
pub async fn list<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    params: Result<Query<AlumniQuery>, QueryRejection>,
) -> ContentResult<impl IntoResponse> {
    let params = query(params)?;
    let alumni = AlumniUseCase::new(state.repo).list(params.year).await?;
    Ok(Json(DataResponse::new(alumni)))
}

/// GET /api/alumni/{id}
pub async fn get<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<impl IntoResponse> {
    let id: AlumnusId = parse_id(&id)?;
    let alumnus = AlumniUseCase::new(state.repo).get(&id).await?;
    Ok(Json(DataResponse::new(alumnus)))
}

/// POST /api/admin/alumni
pub async fn create<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<AlumnusRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let alumnus = AlumniUseCase::new(state.repo).create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(alumnus))))
}

/// PUT /api/admin/alumni/{id}
pub async fn update<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<AlumnusRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let id: AlumnusId = parse_id(&id)?;
    let req = json_body(payload)?;
    let alumnus = AlumniUseCase::new(state.repo)
        .update(&id, req.into())
        .await?;
    Ok(Json(DataResponse::new(alumnus)))
}

/// DELETE /api/admin/alumni/{id}
pub async fn delete<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: AlumnusId = parse_id(&id)?;
    AlumniUseCase::new(state.repo).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
