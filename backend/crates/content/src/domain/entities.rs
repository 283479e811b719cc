//! Domain Entities
//!
//! Everything an administrator publishes on the public site.

use chrono::{DateTime, Utc};
use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{AlbumId, AlumnusId, CategoryId, EventId, MediaId, NewsId, SlideId, UploadId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::value_objects::{
    AlbumDraft, AlumnusDraft, EventDraft, MediaDraft, NewsDraft, ProfileDraft, SlideDraft,
};

// ============================================================================
// News
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            id: CategoryId::new(),
            name,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published: bool,
    /// First time the article went public; kept when it is unpublished
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsArticle {
    pub fn new(draft: NewsDraft) -> Self {
        let now = Utc::now();
        let mut article = Self {
            id: NewsId::new(),
            title: String::new(),
            summary: String::new(),
            body: String::new(),
            cover_image_url: None,
            category_id: None,
            published: false,
            published_at: None,
            created_at: now,
            updated_at: now,
        };
        article.apply(draft);
        article
    }

    pub fn apply(&mut self, draft: NewsDraft) {
        let now = Utc::now();
        self.title = draft.title;
        self.summary = draft.summary;
        self.body = draft.body;
        self.cover_image_url = draft.cover_image_url;
        self.category_id = draft.category_id;
        self.published = draft.published;
        if self.published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Newest publication first, unpublished drafts last by creation time
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn new(draft: EventDraft) -> Self {
        let now = Utc::now();
        Self {
            id: EventId::new(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            cover_image_url: draft.cover_image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.location = draft.location;
        self.starts_at = draft.starts_at;
        self.ends_at = draft.ends_at;
        self.cover_image_url = draft.cover_image_url;
        self.updated_at = Utc::now();
    }

    /// Still running or not yet started at `now`
    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.unwrap_or(self.starts_at) >= now
    }
}

// ============================================================================
// Gallery
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Album {
    pub fn new(draft: AlbumDraft) -> Self {
        let now = Utc::now();
        Self {
            id: AlbumId::new(),
            title: draft.title,
            description: draft.description,
            cover_image_url: draft.cover_image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: AlbumDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.cover_image_url = draft.cover_image_url;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    #[display("image")]
    Image,
    #[display("video")]
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(AppError::bad_request(format!(
                "Unknown media type '{}'",
                other
            ))
            .with_action("Use 'image' or 'video'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: MediaId,
    pub album_id: AlbumId,
    pub url: String,
    pub caption: String,
    pub media_type: MediaType,
    pub created_at: DateTime<Utc>,
}

impl Media {
    pub fn new(album_id: AlbumId, draft: MediaDraft) -> Self {
        Self {
            id: MediaId::new(),
            album_id,
            url: draft.url,
            caption: draft.caption,
            media_type: draft.media_type,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumWithMedia {
    #[serde(flatten)]
    pub album: Album,
    pub media: Vec<Media>,
}

// ============================================================================
// Alumni
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumnus {
    pub id: AlumnusId,
    pub full_name: String,
    pub graduation_year: i32,
    pub occupation: String,
    pub testimonial: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alumnus {
    pub fn new(draft: AlumnusDraft) -> Self {
        let now = Utc::now();
        Self {
            id: AlumnusId::new(),
            full_name: draft.full_name,
            graduation_year: draft.graduation_year,
            occupation: draft.occupation,
            testimonial: draft.testimonial,
            photo_url: draft.photo_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: AlumnusDraft) {
        self.full_name = draft.full_name;
        self.graduation_year = draft.graduation_year;
        self.occupation = draft.occupation;
        self.testimonial = draft.testimonial;
        self.photo_url = draft.photo_url;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Site Profile
// ============================================================================

/// The single about / vision / mission record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub about: String,
    pub vision: String,
    pub mission: String,
    /// `None` until first saved
    pub updated_at: Option<DateTime<Utc>>,
}

impl SiteProfile {
    pub fn from_draft(draft: ProfileDraft) -> Self {
        Self {
            about: draft.about,
            vision: draft.vision,
            mission: draft.mission,
            updated_at: Some(Utc::now()),
        }
    }
}

// ============================================================================
// Slides
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Slide {
    pub fn new(draft: SlideDraft) -> Self {
        let now = Utc::now();
        Self {
            id: SlideId::new(),
            title: draft.title,
            image_url: draft.image_url,
            link_url: draft.link_url,
            position: draft.position,
            active: draft.active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: SlideDraft) {
        self.title = draft.title;
        self.image_url = draft.image_url;
        self.link_url = draft.link_url;
        self.position = draft.position;
        self.active = draft.active;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Uploads
// ============================================================================

/// A stored file. `url` is the public path under the uploads prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    pub id: UploadId,
    pub file_name: String,
    pub original_name: String,
    pub size_bytes: i64,
    pub mime_type: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(published: bool) -> NewsDraft {
        NewsDraft {
            title: "Open house".to_string(),
            summary: String::new(),
            body: String::new(),
            cover_image_url: None,
            category_id: None,
            published,
        }
    }

    #[test]
    fn test_published_at_is_set_once() {
        let mut article = NewsArticle::new(draft(false));
        assert!(article.published_at.is_none());

        article.apply(draft(true));
        let first = article.published_at.unwrap();

        article.apply(draft(false));
        assert_eq!(article.published_at, Some(first));

        article.apply(draft(true));
        assert_eq!(article.published_at, Some(first));
    }

    #[test]
    fn test_media_type_parsing() {
        assert_eq!("image".parse::<MediaType>().unwrap(), MediaType::Image);
        assert_eq!(" Video ".parse::<MediaType>().unwrap(), MediaType::Video);
        assert!("audio".parse::<MediaType>().is_err());
        assert_eq!(MediaType::Video.to_string(), "video");
    }

    #[test]
    fn test_event_upcoming() {
        let now = Utc::now();
        let mut event = Event::new(EventDraft {
            title: "Sports day".to_string(),
            description: String::new(),
            location: String::new(),
            starts_at: now - chrono::Duration::hours(2),
            ends_at: Some(now + chrono::Duration::hours(1)),
            cover_image_url: None,
        });
        assert!(event.is_upcoming_at(now));

        event.ends_at = None;
        assert!(!event.is_upcoming_at(now));
    }

    #[test]
    fn test_album_with_media_flattens() {
        let album = Album::new(AlbumDraft {
            title: "Graduation".to_string(),
            description: String::new(),
            cover_image_url: None,
        });
        let json = serde_json::to_value(AlbumWithMedia {
            album: album.clone(),
            media: vec![],
        })
        .unwrap();
        assert_eq!(json["title"], "Graduation");
        assert_eq!(json["id"], album.id.to_string());
        assert!(json["media"].as_array().unwrap().is_empty());
    }
}
