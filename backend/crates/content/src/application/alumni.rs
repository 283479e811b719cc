//! Alumni Use Case

use std::sync::Arc;

use kernel::id::AlumnusId;

use crate::domain::entities::Alumnus;
use crate::domain::repository::AlumniRepository;
use crate::domain::value_objects::AlumnusDraft;
use crate::error::{ContentError, ContentResult};

pub struct AlumniUseCase<R>
where
    R: AlumniRepository,
{
    repo: Arc<R>,
}

impl<R> AlumniUseCase<R>
where
    R: AlumniRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, graduation_year: Option<i32>) -> ContentResult<Vec<Alumnus>> {
        self.repo.list_alumni(graduation_year).await
    }

    pub async fn get(&self, id: &AlumnusId) -> ContentResult<Alumnus> {
        self.repo
            .find_alumnus(id)
            .await?
            .ok_or(ContentError::NotFound("Alumnus"))
    }

    pub async fn create(&self, draft: AlumnusDraft) -> ContentResult<Alumnus> {
        let alumnus = Alumnus::new(draft.validated()?);
        self.repo.create_alumnus(&alumnus).await?;

        tracing::info!(alumnus_id = %alumnus.id, "Alumnus created");
        Ok(alumnus)
    }

    pub async fn update(&self, id: &AlumnusId, draft: AlumnusDraft) -> ContentResult<Alumnus> {
        let draft = draft.validated()?;
        let mut alumnus = self.get(id).await?;
        alumnus.apply(draft);
        self.repo.update_alumnus(&alumnus).await?;

        tracing::info!(alumnus_id = %alumnus.id, "Alumnus updated");
        Ok(alumnus)
    }

    pub async fn delete(&self, id: &AlumnusId) -> ContentResult<()> {
        if !self.repo.delete_alumnus(id).await? {
            return Err(ContentError::NotFound("Alumnus"));
        }
        tracing::info!(alumnus_id = %id, "Alumnus deleted");
        Ok(())
    }
}
