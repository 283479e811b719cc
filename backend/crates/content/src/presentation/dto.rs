//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are lenient: omitted text fields default to empty and are
//! checked by the domain drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::MediaType;
use crate::domain::value_objects::{
    AlbumDraft, AlumnusDraft, EventDraft, MediaDraft, ProfileDraft, SlideDraft,
};

/// `{ "success": true, "data": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// GET /api/news?category=<id>
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

/// GET /api/events?upcoming=true
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub upcoming: bool,
}

/// GET /api/alumni?year=<y>
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlumniQuery {
    pub year: Option<i32>,
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// News body. `categoryId` is parsed by the handler so an empty string can
/// mean "uncategorized".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl From<EventRequest> for EventDraft {
    fn from(req: EventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            location: req.location,
            starts_at: req.starts_at,
            ends_at: req.ends_at,
            cover_image_url: req.cover_image_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl From<AlbumRequest> for AlbumDraft {
    fn from(req: AlbumRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            cover_image_url: req.cover_image_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub media_type: MediaType,
}

impl From<MediaRequest> for MediaDraft {
    fn from(req: MediaRequest) -> Self {
        Self {
            url: req.url,
            caption: req.caption,
            media_type: req.media_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumnusRequest {
    #[serde(default)]
    pub full_name: String,
    pub graduation_year: i32,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub testimonial: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl From<AlumnusRequest> for AlumnusDraft {
    fn from(req: AlumnusRequest) -> Self {
        Self {
            full_name: req.full_name,
            graduation_year: req.graduation_year,
            occupation: req.occupation,
            testimonial: req.testimonial,
            photo_url: req.photo_url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub mission: String,
}

impl From<ProfileRequest> for ProfileDraft {
    fn from(req: ProfileRequest) -> Self {
        Self {
            about: req.about,
            vision: req.vision,
            mission: req.mission,
        }
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl From<SlideRequest> for SlideDraft {
    fn from(req: SlideRequest) -> Self {
        Self {
            title: req.title,
            image_url: req.image_url,
            link_url: req.link_url,
            position: req.position,
            active: req.active,
        }
    }
}
