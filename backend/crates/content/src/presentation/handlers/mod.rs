//! HTTP Handlers
//!
//! Public reads and back-office writes share one state; the routers decide
//! which handlers are reachable where.

pub mod alumni;
pub mod events;
pub mod gallery;
pub mod news;
pub mod site;
pub mod uploads;

use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use kernel::error::app_error::AppError;

use crate::application::config::UploadConfig;
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: ContentRepository,
{
    pub repo: Arc<R>,
    pub uploads: Arc<UploadConfig>,
}

impl<R> ContentAppState<R>
where
    R: ContentRepository,
{
    pub fn new(repo: R, uploads: Arc<UploadConfig>) -> Self {
        Self {
            repo: Arc::new(repo),
            uploads,
        }
    }
}

/// Unwrap a JSON body, reporting any rejection as a 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ContentResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ContentError::Validation(rejection.body_text()))
}

pub(crate) fn query<T>(params: Result<Query<T>, QueryRejection>) -> ContentResult<T> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| ContentError::Validation(rejection.body_text()))
}

/// Path identifiers; a malformed one is a 400
pub(crate) fn parse_id<T>(raw: &str) -> ContentResult<T>
where
    T: FromStr<Err = uuid::Error>,
{
    raw.parse::<T>()
        .map_err(|e| ContentError::from(AppError::from(e)))
}

/// Optional identifier from a body or query; blank means none
pub(crate) fn parse_optional_id<T>(raw: Option<&str>) -> ContentResult<Option<T>>
where
    T: FromStr<Err = uuid::Error>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(value).map(Some),
    }
}
