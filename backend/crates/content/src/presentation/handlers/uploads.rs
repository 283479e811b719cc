//! Uploads
//!
//! Multipart file parts are buffered one at a time and abandoned as soon as
//! one crosses the per-file ceiling. Non-file fields are ignored.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::UploadId;

use super::{ContentAppState, parse_id};
use crate::application::{IncomingFile, UploadsUseCase};
use crate::application::config::UploadConfig;
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};
use crate::presentation::dto::DataResponse;

fn multipart_error(err: MultipartError, config: &UploadConfig) -> ContentError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ContentError::PayloadTooLarge {
            limit_mb: config.max_file_mb(),
        }
    } else {
        ContentError::Validation(err.body_text())
    }
}

async fn read_files(
    mut multipart: Multipart,
    config: &UploadConfig,
) -> ContentResult<Vec<IncomingFile>> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, config))?
    {
        let Some(original_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let mime_type = field.content_type().map(str::to_owned);

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, config))?
        {
            if (bytes.len() + chunk.len()) as u64 > config.max_file_bytes {
                tracing::warn!(
                    file_name = %original_name,
                    limit_mb = config.max_file_mb(),
                    "Upload rejected: file too large"
                );
                return Err(ContentError::PayloadTooLarge {
                    limit_mb: config.max_file_mb(),
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        files.push(IncomingFile {
            original_name,
            mime_type,
            bytes,
        });
    }

    Ok(files)
}

/// GET /api/admin/uploads
pub async fn list<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<impl IntoResponse> {
    let uploads = UploadsUseCase::new(state.repo, state.uploads).list().await?;
    Ok(Json(DataResponse::new(uploads)))
}

/// POST /api/admin/uploads
pub async fn upload<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ContentResult<impl IntoResponse> {
    let multipart = multipart.map_err(|rejection| ContentError::Validation(rejection.body_text()))?;
    let files = read_files(multipart, &state.uploads).await?;

    let stored = UploadsUseCase::new(state.repo, state.uploads)
        .store(files)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(stored))))
}

/// DELETE /api/admin/uploads/{id}
pub async fn delete<R: ContentRepository>(
    State(state): State<ContentAppState<R>>,
    Path(id): Path<String>,
) -> ContentResult<StatusCode> {
    let id: UploadId = parse_id(&id)?;
    UploadsUseCase::new(state.repo, state.uploads)
        .delete(&id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
