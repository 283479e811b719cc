//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Method names are prefixed per resource so one store can implement all of
//! them without ambiguity.

use chrono::{DateTime, Utc};
use kernel::id::{AlbumId, AlumnusId, CategoryId, EventId, MediaId, NewsId, SlideId, UploadId};

use crate::domain::entities::{
    Album, Alumnus, Category, Event, Media, NewsArticle, SiteProfile, Slide, Upload,
};
use crate::error::ContentResult;

/// Which news articles to list
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsFilter {
    pub published_only: bool,
    pub category_id: Option<CategoryId>,
}

#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Alphabetical
    async fn list_categories(&self) -> ContentResult<Vec<Category>>;

    async fn find_category(&self, id: &CategoryId) -> ContentResult<Option<Category>>;

    /// A duplicate name is `ContentError::Conflict`
    async fn create_category(&self, category: &Category) -> ContentResult<()>;

    /// Articles in the category keep existing, uncategorized
    async fn delete_category(&self, id: &CategoryId) -> ContentResult<bool>;
}

#[trait_variant::make(NewsRepository: Send)]
pub trait LocalNewsRepository {
    /// Newest first: by `published_at`, falling back to `created_at`
    async fn list_news(&self, filter: NewsFilter) -> ContentResult<Vec<NewsArticle>>;

    async fn find_news(&self, id: &NewsId) -> ContentResult<Option<NewsArticle>>;

    async fn create_news(&self, article: &NewsArticle) -> ContentResult<()>;

    async fn update_news(&self, article: &NewsArticle) -> ContentResult<()>;

    async fn delete_news(&self, id: &NewsId) -> ContentResult<bool>;
}

#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    /// Ordered by start. With `upcoming_from`, only events that have not
    /// finished by then.
    async fn list_events(&self, upcoming_from: Option<DateTime<Utc>>) -> ContentResult<Vec<Event>>;

    async fn find_event(&self, id: &EventId) -> ContentResult<Option<Event>>;

    async fn create_event(&self, event: &Event) -> ContentResult<()>;

    async fn update_event(&self, event: &Event) -> ContentResult<()>;

    async fn delete_event(&self, id: &EventId) -> ContentResult<bool>;
}

#[trait_variant::make(GalleryRepository: Send)]
pub trait LocalGalleryRepository {
    /// Newest first
    async fn list_albums(&self) -> ContentResult<Vec<Album>>;

    async fn find_album(&self, id: &AlbumId) -> ContentResult<Option<Album>>;

    async fn create_album(&self, album: &Album) -> ContentResult<()>;

    async fn update_album(&self, album: &Album) -> ContentResult<()>;

    /// Removes the album's media as well
    async fn delete_album(&self, id: &AlbumId) -> ContentResult<bool>;

    /// Oldest first
    async fn list_media(&self, album_id: &AlbumId) -> ContentResult<Vec<Media>>;

    async fn add_media(&self, media: &Media) -> ContentResult<()>;

    async fn delete_media(&self, id: &MediaId) -> ContentResult<bool>;
}

#[trait_variant::make(AlumniRepository: Send)]
pub trait LocalAlumniRepository {
    /// Most recent graduation year first, then by name
    async fn list_alumni(&self, graduation_year: Option<i32>) -> ContentResult<Vec<Alumnus>>;

    async fn find_alumnus(&self, id: &AlumnusId) -> ContentResult<Option<Alumnus>>;

    async fn create_alumnus(&self, alumnus: &Alumnus) -> ContentResult<()>;

    async fn update_alumnus(&self, alumnus: &Alumnus) -> ContentResult<()>;

    async fn delete_alumnus(&self, id: &AlumnusId) -> ContentResult<bool>;
}

#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// `None` if never saved
    async fn get_profile(&self) -> ContentResult<Option<SiteProfile>>;

    /// Insert or replace the single row
    async fn save_profile(&self, profile: &SiteProfile) -> ContentResult<()>;
}

#[trait_variant::make(SlideRepository: Send)]
pub trait LocalSlideRepository {
    /// By position, then creation time
    async fn list_slides(&self, active_only: bool) -> ContentResult<Vec<Slide>>;

    async fn find_slide(&self, id: &SlideId) -> ContentResult<Option<Slide>>;

    async fn create_slide(&self, slide: &Slide) -> ContentResult<()>;

    async fn update_slide(&self, slide: &Slide) -> ContentResult<()>;

    async fn delete_slide(&self, id: &SlideId) -> ContentResult<bool>;
}

#[trait_variant::make(UploadRepository: Send)]
pub trait LocalUploadRepository {
    /// Newest first
    async fn list_uploads(&self) -> ContentResult<Vec<Upload>>;

    async fn find_upload(&self, id: &UploadId) -> ContentResult<Option<Upload>>;

    async fn create_upload(&self, upload: &Upload) -> ContentResult<()>;

    async fn delete_upload(&self, id: &UploadId) -> ContentResult<bool>;
}

/// Everything the content routers need from one store
pub trait ContentRepository:
    CategoryRepository
    + NewsRepository
    + EventRepository
    + GalleryRepository
    + AlumniRepository
    + ProfileRepository
    + SlideRepository
    + UploadRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> ContentRepository for T where
    T: CategoryRepository
        + NewsRepository
        + EventRepository
        + GalleryRepository
        + AlumniRepository
        + ProfileRepository
        + SlideRepository
        + UploadRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
