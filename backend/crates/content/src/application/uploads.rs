//! Uploads Use Case
//!
//! Files are written under the configured directory with a generated name
//! that keeps the original extension, then recorded in the database. The
//! client-declared MIME type is stored as given. A request stores all of its
//! files or none of them.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::UploadId;
use nid::Nanoid;

use crate::application::config::UploadConfig;
use crate::domain::entities::Upload;
use crate::domain::repository::UploadRepository;
use crate::error::{ContentError, ContentResult};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";
const EXTENSION_MAX: usize = 10;
const ORIGINAL_NAME_MAX: usize = 255;

/// One file part of a multipart request
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

pub struct UploadsUseCase<R>
where
    R: UploadRepository,
{
    repo: Arc<R>,
    config: Arc<UploadConfig>,
}

impl<R> UploadsUseCase<R>
where
    R: UploadRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UploadConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn list(&self) -> ContentResult<Vec<Upload>> {
        self.repo.list_uploads().await
    }

    /// Nothing is written unless every file is within the size ceiling
    pub async fn store(&self, files: Vec<IncomingFile>) -> ContentResult<Vec<Upload>> {
        if files.is_empty() {
            return Err(ContentError::Validation("No file was provided".into()));
        }

        if files
            .iter()
            .any(|f| f.bytes.len() as u64 > self.config.max_file_bytes)
        {
            return Err(ContentError::PayloadTooLarge {
                limit_mb: self.config.max_file_mb(),
            });
        }

        tokio::fs::create_dir_all(&self.config.dir).await?;

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            match self.store_one(file).await {
                Ok(upload) => stored.push(upload),
                Err(e) => {
                    self.discard(&stored).await;
                    return Err(e);
                }
            }
        }
        Ok(stored)
    }

    /// Best-effort removal of files stored earlier in a failed request
    async fn discard(&self, stored: &[Upload]) {
        for upload in stored {
            if let Err(e) = self.repo.delete_upload(&upload.id).await {
                tracing::warn!(error = %e, upload_id = %upload.id, "Could not roll back upload record");
            }
            if let Err(io) = tokio::fs::remove_file(self.config.dir.join(&upload.file_name)).await {
                tracing::warn!(error = %io, file_name = %upload.file_name, "Could not roll back upload file");
            }
        }
        if !stored.is_empty() {
            tracing::info!(count = stored.len(), "Rolled back partially stored upload request");
        }
    }

    async fn store_one(&self, file: IncomingFile) -> ContentResult<Upload> {
        let original_name = original_name(&file.original_name);
        let file_name = generate_file_name(&original_name);
        let path = self.config.dir.join(&file_name);

        tokio::fs::write(&path, &file.bytes).await?;

        let upload = Upload {
            id: UploadId::new(),
            url: self.config.public_url(&file_name),
            file_name,
            original_name,
            size_bytes: file.bytes.len() as i64,
            mime_type: file
                .mime_type
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            created_at: Utc::now(),
        };

        if let Err(e) = self.repo.create_upload(&upload).await {
            if let Err(io) = tokio::fs::remove_file(&path).await {
                tracing::warn!(error = %io, file_name = %upload.file_name, "Could not remove orphaned upload");
            }
            return Err(e);
        }

        tracing::info!(
            upload_id = %upload.id,
            file_name = %upload.file_name,
            size_bytes = upload.size_bytes,
            mime_type = %upload.mime_type,
            "File uploaded"
        );
        Ok(upload)
    }

    /// Removes the record, then the file
    pub async fn delete(&self, id: &UploadId) -> ContentResult<()> {
        let upload = self
            .repo
            .find_upload(id)
            .await?
            .ok_or(ContentError::NotFound("Upload"))?;

        if !self.repo.delete_upload(id).await? {
            return Err(ContentError::NotFound("Upload"));
        }

        match tokio::fs::remove_file(self.config.dir.join(&upload.file_name)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(file_name = %upload.file_name, "Upload file already missing");
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(upload_id = %id, file_name = %upload.file_name, "Upload deleted");
        Ok(())
    }
}

/// Last path component of a client-supplied name, trimmed and bounded
fn original_name(raw: &str) -> String {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let name: String = name
        .chars()
        .filter(|c| !c.is_control())
        .take(ORIGINAL_NAME_MAX)
        .collect();

    if name.is_empty() { "file".to_string() } else { name }
}

/// Random URL-safe name plus the original extension, if it is a sane one
pub fn generate_file_name(original_name: &str) -> String {
    let id: Nanoid = Nanoid::new();

    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= EXTENSION_MAX
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::infra::memory::MemoryContentRepository;

    /// Upload store whose Nth insert fails
    struct FailingInsert {
        inner: MemoryContentRepository,
        inserts: AtomicUsize,
        fail_on: usize,
    }

    impl UploadRepository for FailingInsert {
        async fn list_uploads(&self) -> ContentResult<Vec<Upload>> {
            self.inner.list_uploads().await
        }

        async fn find_upload(&self, id: &UploadId) -> ContentResult<Option<Upload>> {
            self.inner.find_upload(id).await
        }

        async fn create_upload(&self, upload: &Upload) -> ContentResult<()> {
            if self.inserts.fetch_add(1, Ordering::SeqCst) + 1 == self.fail_on {
                return Err(ContentError::Internal("insert failed".into()));
            }
            self.inner.create_upload(upload).await
        }

        async fn delete_upload(&self, id: &UploadId) -> ContentResult<bool> {
            self.inner.delete_upload(id).await
        }
    }

    fn incoming(name: &str) -> IncomingFile {
        IncomingFile {
            original_name: name.to_string(),
            mime_type: Some("text/plain".to_string()),
            bytes: name.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_failed_batch_leaves_nothing_behind() {
        let dir = std::env::temp_dir().join(format!("uploads-rollback-{}", uuid::Uuid::new_v4()));
        let repo = Arc::new(FailingInsert {
            inner: MemoryContentRepository::default(),
            inserts: AtomicUsize::new(0),
            fail_on: 2,
        });
        let use_case = UploadsUseCase::new(repo.clone(), Arc::new(UploadConfig::with_dir(&dir)));

        let result = use_case
            .store(vec![incoming("one.txt"), incoming("two.txt"), incoming("three.txt")])
            .await;

        assert!(matches!(result, Err(ContentError::Internal(_))));
        assert!(repo.list_uploads().await.unwrap().is_empty());
        let mut entries = std::fs::read_dir(&dir).unwrap();
        assert!(entries.next().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_batch_stores_every_file() {
        let dir = std::env::temp_dir().join(format!("uploads-batch-{}", uuid::Uuid::new_v4()));
        let repo = Arc::new(MemoryContentRepository::default());
        let use_case = UploadsUseCase::new(repo.clone(), Arc::new(UploadConfig::with_dir(&dir)));

        let stored = use_case
            .store(vec![incoming("one.txt"), incoming("two.txt")])
            .await
            .unwrap();

        assert_eq!(stored.len(), 2);
        assert_eq!(repo.list_uploads().await.unwrap().len(), 2);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = generate_file_name("Team Photo.JPG");
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), 21 + ".jpg".len());
    }

    #[test]
    fn test_generated_names_are_unique() {
        assert_ne!(generate_file_name("a.png"), generate_file_name("a.png"));
    }

    #[test]
    fn test_odd_extensions_dropped() {
        assert_eq!(generate_file_name("README").len(), 21);
        assert_eq!(generate_file_name("archive.tar.g$z").len(), 21);
        assert_eq!(generate_file_name("x.averyverylongext").len(), 21);
    }

    #[test]
    fn test_original_name_strips_directories() {
        assert_eq!(original_name("C:\\Users\\me\\cv.pdf"), "cv.pdf");
        assert_eq!(original_name("../../etc/passwd"), "passwd");
        assert_eq!(original_name("   "), "file");
    }
}
