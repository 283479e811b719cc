//! Categories and news articles

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::{CategoryId, NewsId};

use super::{ContentAppState, json_body, parse_id, parse_optional_id, query};
use crate::application::NewsUseCase;
use crate::domain::repository::ContentRepository;
use crate::domain::value_objects::NewsDraft;
use crate::error::ContentResult;
use crate::presentation::dto::{CategoryRequest, DataResponse, NewsQuery, NewsRequest};

fn draft(req: NewsRequest) -> ContentResult<NewsDraft> {
    Ok(NewsDraft {
        category_id: parse_optional_id::<CategoryId>(req.category_id.as_deref())?,
        title: req.title,
        summary: req.summary,
        body: req.body,
        cover_image_url: req.cover_image_url,
        published: req.published,
    })
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories
pub async fn list_categories<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let categories = NewsUseCase::new(state.repo).list_categories().await?;
    Ok(Json(DataResponse::new(categories)))
}

/// POST /api/admin/categories
pub async fn create_category<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let req = json_body(payload)?;
    let category = NewsUseCase::new(state.repo)
        .create_category(&req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(category))))
}

/// DELETE /api/admin/categories/{id}
pub async fn delete_category<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: CategoryId = parse_id(&id)?;
    NewsUseCase::new(state.repo).delete_category(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Public news
// ============================================================================

/// GET /api/news
pub async fn list_published<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    params: Result<Query<NewsQuery>, QueryRejection>,
) -> ContentResult<impl IntoResponse> {
    let params = query(params)?;
    let category_id = parse_optional_id::<CategoryId>(params.category.as_deref())?;

    let articles = NewsUseCase::new(state.repo)
        .list_published(category_id)
        .await?;
    Ok(Json(DataResponse::new(articles)))
}

/// GET /api/news/{id}
pub async fn get_published<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<impl IntoResponse> {
    let id: NewsId = parse_id(&id)?;
    let article = NewsUseCase::new(state.repo).get_published(&id).await?;
    Ok(Json(DataResponse::new(article)))
}

// ============================================================================
// Back office
// ============================================================================

/// GET /api/admin/news
pub async fn list_all<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let articles = NewsUseCase::new(state.repo).list_all().await?;
    Ok(Json(DataResponse::new(articles)))
}

/// GET /api/admin/news/{id}
pub async fn get<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<impl IntoResponse> {
    let id: NewsId = parse_id(&id)?;
    let article = NewsUseCase::new(state.repo).get(&id).await?;
    Ok(Json(DataResponse::new(article)))
}

/// POST /api/admin/news
pub async fn create<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    payload: Result<Json<NewsRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let draft = draft(json_body(payload)?)?;
    let article = NewsUseCase::new(state.repo).create(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(article))))
}

/// PUT /api/admin/news/{id}
pub async fn update<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<NewsRequest>, JsonRejection>,
) -> ContentResult<impl IntoResponse> {
    let id: NewsId = parse_id(&id)?;
    let draft = draft(json_body(payload)?)?;
    let article = NewsUseCase::new(state.repo).update(&id, draft).await?;
    Ok(Json(DataResponse::new(article)))
}

/// DELETE /api/admin/news/{id}
pub async fn delete<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: NewsId = parse_id(&id)?;
    NewsUseCase::new(state.repo).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
