//! Gallery Use Case
//!
//! Albums and the photos / videos inside them.

use std::sync::Arc;

use kernel::id::{AlbumId, MediaId};

use crate::domain::entities::{Album, AlbumWithMedia, Media};
use crate::domain::repository::GalleryRepository;
use crate::domain::value_objects::{AlbumDraft, MediaDraft};
use crate::error::{ContentError, ContentResult};

pub struct GalleryUseCase<R>
where
    R: GalleryRepository,
{
    repo: Arc<R>,
}

impl<R> GalleryUseCase<R>
where
    R: GalleryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_albums(&self) -> ContentResult<Vec<Album>> {
        self.repo.list_albums().await
    }

    async fn find_album(&self, id: &AlbumId) -> ContentResult<Album> {
        self.repo
            .find_album(id)
            .await?
            .ok_or(ContentError::NotFound("Album"))
    }

    pub async fn get_album(&self, id: &AlbumId) -> ContentResult<AlbumWithMedia> {
        let album = self.find_album(id).await?;
        let media = self.repo.list_media(id).await?;
        Ok(AlbumWithMedia { album, media })
    }

    pub async fn create_album(&self, draft: AlbumDraft) -> ContentResult<Album> {
        let album = Album::new(draft.validated()?);
        self.repo.create_album(&album).await?;

        tracing::info!(album_id = %album.id, "Album created");
        Ok(album)
    }

    pub async fn update_album(&self, id: &AlbumId, draft: AlbumDraft) -> ContentResult<Album> {
        let draft = draft.validated()?;
        let mut album = self.find_album(id).await?;
        album.apply(draft);
        self.repo.update_album(&album).await?;

        tracing::info!(album_id = %album.id, "Album updated");
        Ok(album)
    }

    pub async fn delete_album(&self, id: &AlbumId) -> ContentResult<()> {
        if !self.repo.delete_album(id).await? {
            return Err(ContentError::NotFound("Album"));
        }
        tracing::info!(album_id = %id, "Album deleted with its media");
        Ok(())
    }

    pub async fn add_media(&self, album_id: &AlbumId, draft: MediaDraft) -> ContentResult<Media> {
        let draft = draft.validated()?;
        let album = self.find_album(album_id).await?;

        let media = Media::new(album.id, draft);
        self.repo.add_media(&media).await?;

        tracing::info!(album_id = %album.id, media_id = %media.id, media_type = %media.media_type, "Media added");
        Ok(media)
    }

    pub async fn delete_media(&self, id: &MediaId) -> ContentResult<()> {
        if !self.repo.delete_media(id).await? {
            return Err(ContentError::NotFound("Media"));
        }
        tracing::info!(media_id = %id, "Media deleted");
        Ok(())
    }
}
