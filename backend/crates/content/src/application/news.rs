//! News Use Case
//!
//! Categories and news articles.

use std::sync::Arc;

use kernel::id::{CategoryId, NewsId};

use crate::domain::entities::{Category, NewsArticle};
use crate::domain::repository::{CategoryRepository, NewsFilter, NewsRepository};
use crate::domain::value_objects::{CategoryName, NewsDraft};
use crate::error::{ContentError, ContentResult};

pub struct NewsUseCase<R>
where
    R: CategoryRepository + NewsRepository,
{
    repo: Arc<R>,
}

impl<R> NewsUseCase<R>
where
    R: CategoryRepository + NewsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ===== Categories =====

    pub async fn list_categories(&self) -> ContentResult<Vec<Category>> {
        self.repo.list_categories().await
    }

    pub async fn create_category(&self, name: &str) -> ContentResult<Category> {
        let category = Category::new(CategoryName::new(name)?.into_inner());
        self.repo.create_category(&category).await.map_err(|e| match e {
            ContentError::Conflict(_) => {
                ContentError::Conflict(format!("Category '{}' already exists", category.name))
            }
            other => other,
        })?;

        tracing::info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    pub async fn delete_category(&self, id: &CategoryId) -> ContentResult<()> {
        if !self.repo.delete_category(id).await? {
            return Err(ContentError::NotFound("Category"));
        }
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }

    // ===== Public reads =====

    pub async fn list_published(
        &self,
        category_id: Option<CategoryId>,
    ) -> ContentResult<Vec<NewsArticle>> {
        self.repo
            .list_news(NewsFilter {
                published_only: true,
                category_id,
            })
            .await
    }

    /// Drafts are invisible to the public
    pub async fn get_published(&self, id: &NewsId) -> ContentResult<NewsArticle> {
        let article = self.get(id).await?;
        if !article.published {
            return Err(ContentError::NotFound("News article"));
        }
        Ok(article)
    }

    // ===== Back office =====

    pub async fn list_all(&self) -> ContentResult<Vec<NewsArticle>> {
        self.repo.list_news(NewsFilter::default()).await
    }

    pub async fn get(&self, id: &NewsId) -> ContentResult<NewsArticle> {
        self.repo
            .find_news(id)
            .await?
            .ok_or(ContentError::NotFound("News article"))
    }

    pub async fn create(&self, draft: NewsDraft) -> ContentResult<NewsArticle> {
        let draft = draft.validated()?;
        self.ensure_category(draft.category_id).await?;

        let article = NewsArticle::new(draft);
        self.repo.create_news(&article).await?;

        tracing::info!(news_id = %article.id, published = article.published, "News article created");
        Ok(article)
    }

    pub async fn update(&self, id: &NewsId, draft: NewsDraft) -> ContentResult<NewsArticle> {
        let draft = draft.validated()?;
        self.ensure_category(draft.category_id).await?;

        let mut article = self.get(id).await?;
        article.apply(draft);
        self.repo.update_news(&article).await?;

        tracing::info!(news_id = %article.id, published = article.published, "News article updated");
        Ok(article)
    }

    pub async fn delete(&self, id: &NewsId) -> ContentResult<()> {
        if !self.repo.delete_news(id).await? {
            return Err(ContentError::NotFound("News article"));
        }
        tracing::info!(news_id = %id, "News article deleted");
        Ok(())
    }

    async fn ensure_category(&self, category_id: Option<CategoryId>) -> ContentResult<()> {
        if let Some(category_id) = category_id {
            if self.repo.find_category(&category_id).await?.is_none() {
                return Err(ContentError::Validation("Category does not exist".into()));
            }
        }
        Ok(())
    }
}
