//! Events

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use kernel::id::EventId;

use super::{ContentAppState, json_body, parse_id, query};
use crate::application::EventsUseCase;
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{DataResponse, EventRequest, EventsQuery};

/// GET /api/events
pub async fn list<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    params: Result<Query<EventsQuery>, QueryRejection>,
) -> ContentResult<impl IntoResponse> {
    let params = query(params)?;
    let upcoming_from = params.upcoming.then(Utc::now);

    let events = EventsUseCase::new(state.repo).list(upcoming_from).await?;
    Ok(Json(DataResponse::new(events)))
}

/// GET /api/events/{id}
pub async fn get<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<impl IntoResponse> {
    let id: EventId = parse_id(&id)?;
    let event = EventsUseCase::new(state.repo).get(&id).await?;
    Ok(Json(DataResponse::new(event)))
}

/// POST /api/admin/events
pub async fn create<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let event = EventsUseCase::new(state.repo).create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(event))))
}

/// PUT /api/admin/events/{id}
pub async fn update<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let id: EventId = parse_id(&id)?;
    let req = json_body(payload)?;
    let event = EventsUseCase::new(state.repo).update(&id, req.into()).await?;
    Ok(Json(DataResponse::new(event)))
}

/// DELETE /api/admin/events/{id}
pub async fn delete<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: EventId = parse_id(&id)?;
    EventsUseCase::new(state.repo).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
