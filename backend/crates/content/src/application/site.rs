//! Site Use Case
//!
//! The about / vision / mission profile and the home page slides.

use std::sync::Arc;

use kernel::id::SlideId;

use crate::domain::entities::{SiteProfile, Slide};
use crate::domain::repository::{ProfileRepository, SlideRepository};
use crate::domain::value_objects::{ProfileDraft, SlideDraft};
use crate::error::{ContentError, ContentResult};

pub struct SiteUseCase<R>
where
    R: ProfileRepository + SlideRepository,
{
    repo: Arc<R>,
}

impl<R> SiteUseCase<R>
where
    R: ProfileRepository + SlideRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ===== Profile =====

    /// Empty strings until an administrator saves one
    pub async fn profile(&self) -> ContentResult<SiteProfile> {
        Ok(self.repo.get_profile().await?.unwrap_or_default())
    }

    pub async fn save_profile(&self, draft: ProfileDraft) -> ContentResult<SiteProfile> {
        let profile = SiteProfile::from_draft(draft.validated()?);
        self.repo.save_profile(&profile).await?;

        tracing::info!("Site profile updated");
        Ok(profile)
    }

    // ===== Slides =====

    pub async fn list_slides(&self, active_only: bool) -> ContentResult<Vec<Slide>> {
        self.repo.list_slides(active_only).await
    }

    pub async fn get_slide(&self, id: &SlideId) -> ContentResult<Slide> {
        self.repo
            .find_slide(id)
            .await?
            .ok_or(ContentError::NotFound("Slide"))
    }

    pub async fn create_slide(&self, draft: SlideDraft) -> ContentResult<Slide> {
        let slide = Slide::new(draft.validated()?);
        self.repo.create_slide(&slide).await?;

        tracing::info!(slide_id = %slide.id, position = slide.position, "Slide created");
        Ok(slide)
    }

    pub async fn update_slide(&self, id: &SlideId, draft: SlideDraft) -> ContentResult<Slide> {
        let draft = draft.validated()?;
        let mut slide = self.get_slide(id).await?;
        slide.apply(draft);
        self.repo.update_slide(&slide).await?;

        tracing::info!(slide_id = %slide.id, "Slide updated");
        Ok(slide)
    }

    pub async fn delete_slide(&self, id: &SlideId) -> ContentResult<()> {
        if !self.repo.delete_slide(id).await? {
            return Err(ContentError::NotFound("Slide"));
        }
        tracing::info!(slide_id = %id, "Slide deleted");
        Ok(())
    }
}
