//! In-memory content store
//!
//! Mirrors the ordering and cascade rules of the Postgres schema.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use kernel::id::{AlbumId, AlumnusId, CategoryId, EventId, MediaId, NewsId, SlideId, UploadId};

use crate::domain::entities::{
    Album, Alumnus, Category, Event, Media, NewsArticle, SiteProfile, Slide, Upload,
};
use crate::domain::repository::{
    AlumniRepository, CategoryRepository, EventRepository, GalleryRepository, NewsFilter,
    NewsRepository, ProfileRepository, SlideRepository, UploadRepository,
};
use crate::error::{ContentError, ContentResult};

#[derive(Default)]
struct Store {
    categories: Vec<Category>,
    news: Vec<NewsArticle>,
    events: Vec<Event>,
    albums: Vec<Album>,
    media: Vec<Media>,
    alumni: Vec<Alumnus>,
    profile: Option<SiteProfile>,
    slides: Vec<Slide>,
    uploads: Vec<Upload>,
}

/// Process-local store for tests and local wiring
#[derive(Clone, Default)]
pub struct MemoryContentRepository {
    store: Arc<Mutex<Store>>,
}

impl MemoryContentRepository {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn replace<T: Clone>(
    items: &mut [T],
    item: &T,
    same: impl Fn(&T) -> bool,
    what: &'static str,
) -> ContentResult<()> {
    let slot = items
        .iter_mut()
        .find(|i| same(&**i))
        .ok_or(ContentError::NotFound(what))?;
    *slot = item.clone();
    Ok(())
}

fn remove<T>(items: &mut Vec<T>, keep: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(keep);
    items.len() != before
}

impl CategoryRepository for MemoryContentRepository {
    async fn list_categories(&self) -> ContentResult<Vec<Category>> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by_key(|c| c.name.to_lowercase());
        Ok(categories)
    }

    async fn find_category(&self, id: &CategoryId) -> ContentResult<Option<Category>> {
        let store = self.lock();
        Ok(store.categories.iter().find(|c| &c.id == id).cloned())
    }

    async fn create_category(&self, category: &Category) -> ContentResult<()> {
        let mut store = self.lock();
        if store
            .categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&category.name))
        {
            return Err(ContentError::Conflict("duplicate".into()));
        }
        store.categories.push(category.clone());
        Ok(())
    }

    async fn delete_category(&self, id: &CategoryId) -> ContentResult<bool> {
        let mut store = self.lock();
        for article in store.news.iter_mut() {
            if article.category_id.as_ref() == Some(id) {
                article.category_id = None;
            }
        }
        Ok(remove(&mut store.categories, |c| &c.id != id))
    }
}

impl NewsRepository for MemoryContentRepository {
    async fn list_news(&self, filter: NewsFilter) -> ContentResult<Vec<NewsArticle>> {
        let store = self.lock();
        let mut news: Vec<NewsArticle> = store
            .news
            .iter()
            .filter(|a| !filter.published_only || a.published)
            .filter(|a| filter.category_id.is_none() || a.category_id == filter.category_id)
            .cloned()
            .collect();
        news.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        Ok(news)
    }

    async fn find_news(&self, id: &NewsId) -> ContentResult<Option<NewsArticle>> {
        let store = self.lock();
        Ok(store.news.iter().find(|a| &a.id == id).cloned())
    }

    async fn create_news(&self, article: &NewsArticle) -> ContentResult<()> {
        self.lock().news.push(article.clone());
        Ok(())
    }

    async fn update_news(&self, article: &NewsArticle) -> ContentResult<()> {
        let mut store = self.lock();
        replace(&mut store.news, article, |a| a.id == article.id, "News article")
    }

    async fn delete_news(&self, id: &NewsId) -> ContentResult<bool> {
        Ok(remove(&mut self.lock().news, |a| &a.id != id))
    }
}

impl EventRepository for MemoryContentRepository {
    async fn list_events(
        &self,
        upcoming_from: Option<DateTime<Utc>>,
    ) -> ContentResult<Vec<Event>> {
        let store = self.lock();
        let mut events: Vec<Event> = store
            .events
            .iter()
            .filter(|e| upcoming_from.is_none_or(|now| e.is_upcoming_at(now)))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.starts_at);
        Ok(events)
    }

    async fn find_event(&self, id: &EventId) -> ContentResult<Option<Event>> {
        let store = self.lock();
        Ok(store.events.iter().find(|e| &e.id == id).cloned())
    }

    async fn create_event(&self, event: &Event) -> ContentResult<()> {
        self.lock().events.push(event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> ContentResult<()> {
        let mut store = self.lock();
        replace(&mut store.events, event, |e| e.id == event.id, "Event")
    }

    async fn delete_event(&self, id: &EventId) -> ContentResult<bool> {
        Ok(remove(&mut self.lock().events, |e| &e.id != id))
    }
}

impl GalleryRepository for MemoryContentRepository {
    async fn list_albums(&self) -> ContentResult<Vec<Album>> {
        let mut albums = self.lock().albums.clone();
        albums.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(albums)
    }

    async fn find_album(&self, id: &AlbumId) -> ContentResult<Option<Album>> {
        let store = self.lock();
        Ok(store.albums.iter().find(|a| &a.id == id).cloned())
    }

    async fn create_album(&self, album: &Album) -> ContentResult<()> {
        self.lock().albums.push(album.clone());
        Ok(())
    }

    async fn update_album(&self, album: &Album) -> ContentResult<()> {
        let mut store = self.lock();
        replace(&mut store.albums, album, |a| a.id == album.id, "Album")
    }

    async fn delete_album(&self, id: &AlbumId) -> ContentResult<bool> {
        let mut store = self.lock();
        store.media.retain(|m| &m.album_id != id);
        Ok(remove(&mut store.albums, |a| &a.id != id))
    }

    async fn list_media(&self, album_id: &AlbumId) -> ContentResult<Vec<Media>> {
        let store = self.lock();
        Ok(store
            .media
            .iter()
            .filter(|m| &m.album_id == album_id)
            .cloned()
            .collect())
    }

    async fn add_media(&self, media: &Media) -> ContentResult<()> {
        self.lock().media.push(media.clone());
        Ok(())
    }

    async fn delete_media(&self, id: &MediaId) -> ContentResult<bool> {
        Ok(remove(&mut self.lock().media, |m| &m.id != id))
    }
}

impl AlumniRepository for MemoryContentRepository {
    async fn list_alumni(&self, graduation_year: Option<i32>) -> ContentResult<Vec<Alumnus>> {
        let store = self.lock();
        let mut alumni: Vec<Alumnus> = store
            .alumni
            .iter()
            .filter(|a| graduation_year.is_none_or(|y| a.graduation_year == y))
            .cloned()
            .collect();
        alumni.sort_by(|a, b| {
            b.graduation_year
                .cmp(&a.graduation_year)
                .then_with(|| a.full_name.cmp(&b.full_name))
        });
        Ok(alumni)
    }

    async fn find_alumnus(&self, id: &AlumnusId) -> ContentResult<Option<Alumnus>> {
        let store = self.lock();
        Ok(store.alumni.iter().find(|a| &a.id == id).cloned())
    }

    async fn create_alumnus(&self, alumnus: &Alumnus) -> ContentResult<()> {
        self.lock().alumni.push(alumnus.clone());
        Ok(())
    }

    async fn update_alumnus(&self, alumnus: &Alumnus) -> ContentResult<()> {
        let mut store = self.lock();
        replace(&mut store.alumni, alumnus, |a| a.id == alumnus.id, "Alumnus")
    }

    async fn delete_alumnus(&self, id: &AlumnusId) -> ContentResult<bool> {
        Ok(remove(&mut self.lock().alumni, |a| &a.id != id))
    }
}

impl ProfileRepository for MemoryContentRepository {
    async fn get_profile(&self) -> ContentResult<Option<SiteProfile>> {
        Ok(self.lock().profile.clone())
    }

    async fn save_profile(&self, profile: &SiteProfile) -> ContentResult<()> {
        self.lock().profile = Some(profile.clone());
        Ok(())
    }
}

impl SlideRepository for MemoryContentRepository {
    async fn list_slides(&self, active_only: bool) -> ContentResult<Vec<Slide>> {
        let store = self.lock();
        let mut slides: Vec<Slide> = store
            .slides
            .iter()
            .filter(|s| !active_only || s.active)
            .cloned()
            .collect();
        slides.sort_by_key(|s| (s.position, s.created_at));
        Ok(slides)
    }

    async fn find_slide(&self, id: &SlideId) -> ContentResult<Option<Slide>> {
        let store = self.lock();
        Ok(store.slides.iter().find(|s| &s.id == id).cloned())
    }

    async fn create_slide(&self, slide: &Slide) -> ContentResult<()> {
        self.lock().slides.push(slide.clone());
        Ok(())
    }

    async fn update_slide(&self, slide: &Slide) -> ContentResult<()> {
        let mut store = self.lock();
        replace(&mut store.slides, slide, |s| s.id == slide.id, "Slide")
    }

    async fn delete_slide(&self, id: &SlideId) -> ContentResult<bool> {
        Ok(remove(&mut self.lock().slides, |s| &s.id != id))
    }
}

impl UploadRepository for MemoryContentRepository {
    async fn list_uploads(&self) -> ContentResult<Vec<Upload>> {
        let mut uploads = self.lock().uploads.clone();
        uploads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(uploads)
    }

    async fn find_upload(&self, id: &UploadId) -> ContentResult<Option<Upload>> {
        let store = self.lock();
        Ok(store.uploads.iter().find(|u| &u.id == id).cloned())
    }

    async fn create_upload(&self, upload: &Upload) -> ContentResult<()> {
        self.lock().uploads.push(upload.clone());
        Ok(())
    }

    async fn delete_upload(&self, id: &UploadId) -> ContentResult<bool> {
        Ok(remove(&mut self.lock().uploads, |u| &u.id != id))
    }
}
