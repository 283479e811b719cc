//! Drafts and Field Rules
//!
//! A draft is the editable part of an entity as sent by the back office.
//! `validated()` trims text, turns blank optionals into `None` and checks
//! every field rule before anything touches storage.

use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::CategoryId;

use crate::domain::entities::MediaType;

pub const CATEGORY_NAME_MAX: usize = 60;
pub const TITLE_MAX: usize = 200;
pub const SHORT_TEXT_MAX: usize = 500;
pub const LONG_TEXT_MAX: usize = 50_000;
pub const URL_MAX: usize = 2048;
pub const GRADUATION_YEARS: std::ops::RangeInclusive<i32> = 1900..=2100;

// ============================================================================
// Field rules
// ============================================================================

/// Trimmed, non-empty, at most `max` characters
pub fn required_text(field: &str, value: &str, max: usize) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(format!("{} is required", field)));
    }
    bounded(field, value, max)
}

/// Trimmed, may be empty
pub fn optional_text(field: &str, value: &str, max: usize) -> AppResult<String> {
    bounded(field, value.trim(), max)
}

fn bounded(field: &str, value: &str, max: usize) -> AppResult<String> {
    if value.chars().count() > max {
        return Err(AppError::bad_request(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(value.to_string())
}

/// A site-relative path (`/uploads/...`) or an absolute http(s) URL
pub fn required_url(field: &str, value: &str) -> AppResult<String> {
    let value = required_text(field, value, URL_MAX)?;
    let acceptable = (value.starts_with('/') && !value.starts_with("//"))
        || value.starts_with("https://")
        || value.starts_with("http://");

    if !acceptable || value.chars().any(char::is_whitespace) {
        return Err(AppError::bad_request(format!("{} must be a URL", field))
            .with_action("Use an uploaded file path like /uploads/photo.jpg or an http(s) link"));
    }
    Ok(value)
}

/// Blank means "no URL"
pub fn optional_url(field: &str, value: Option<String>) -> AppResult<Option<String>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_url(field, v).map(Some),
    }
}

// ============================================================================
// Drafts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(name: &str) -> AppResult<Self> {
        required_text("Name", name, CATEGORY_NAME_MAX).map(Self)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub category_id: Option<CategoryId>,
    pub published: bool,
}

impl NewsDraft {
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            title: required_text("Title", &self.title, TITLE_MAX)?,
            summary: optional_text("Summary", &self.summary, SHORT_TEXT_MAX)?,
            body: optional_text("Body", &self.body, LONG_TEXT_MAX)?,
            cover_image_url: optional_url("Cover image", self.cover_image_url)?,
            category_id: self.category_id,
            published: self.published,
        })
    }
}

#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub cover_image_url: Option<String>,
}

impl EventDraft {
    pub fn validated(self) -> AppResult<Self> {
        if let Some(ends_at) = self.ends_at {
            if ends_at < self.starts_at {
                return Err(AppError::bad_request("Event cannot end before it starts"));
            }
        }

        Ok(Self {
            title: required_text("Title", &self.title, TITLE_MAX)?,
            description: optional_text("Description", &self.description, LONG_TEXT_MAX)?,
            location: optional_text("Location", &self.location, TITLE_MAX)?,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            cover_image_url: optional_url("Cover image", self.cover_image_url)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AlbumDraft {
    pub title: String,
    pub description: String,
    pub cover_image_url: Option<String>,
}

impl AlbumDraft {
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            title: required_text("Title", &self.title, TITLE_MAX)?,
            description: optional_text("Description", &self.description, SHORT_TEXT_MAX)?,
            cover_image_url: optional_url("Cover image", self.cover_image_url)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MediaDraft {
    pub url: String,
    pub caption: String,
    pub media_type: MediaType,
}

impl MediaDraft {
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            url: required_url("Media URL", &self.url)?,
            caption: optional_text("Caption", &self.caption, SHORT_TEXT_MAX)?,
            media_type: self.media_type,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AlumnusDraft {
    pub full_name: String,
    pub graduation_year: i32,
    pub occupation: String,
    pub testimonial: String,
    pub photo_url: Option<String>,
}

impl AlumnusDraft {
    pub fn validated(self) -> AppResult<Self> {
        if !GRADUATION_YEARS.contains(&self.graduation_year) {
            return Err(AppError::bad_request(format!(
                "Graduation year must be between {} and {}",
                GRADUATION_YEARS.start(),
                GRADUATION_YEARS.end()
            )));
        }

        Ok(Self {
            full_name: required_text("Full name", &self.full_name, TITLE_MAX)?,
            graduation_year: self.graduation_year,
            occupation: optional_text("Occupation", &self.occupation, TITLE_MAX)?,
            testimonial: optional_text("Testimonial", &self.testimonial, LONG_TEXT_MAX)?,
            photo_url: optional_url("Photo", self.photo_url)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub about: String,
    pub vision: String,
    pub mission: String,
}

impl ProfileDraft {
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            about: optional_text("About", &self.about, LONG_TEXT_MAX)?,
            vision: optional_text("Vision", &self.vision, LONG_TEXT_MAX)?,
            mission: optional_text("Mission", &self.mission, LONG_TEXT_MAX)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SlideDraft {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
}

impl SlideDraft {
    pub fn validated(self) -> AppResult<Self> {
        if self.position < 0 {
            return Err(AppError::bad_request("Position cannot be negative"));
        }

        Ok(Self {
            title: optional_text("Title", &self.title, TITLE_MAX)?,
            image_url: required_url("Image", &self.image_url)?,
            link_url: optional_url("Link", self.link_url)?,
            position: self.position,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("Title", "  Hello ", 10).unwrap(), "Hello");
        assert!(required_text("Title", "   ", 10).is_err());
        assert!(required_text("Title", "elevenchars", 10).is_err());
        assert!(required_text("Title", "ééééé", 5).is_ok());
    }

    #[test]
    fn test_urls() {
        assert!(required_url("Image", "/uploads/a.png").is_ok());
        assert!(required_url("Image", "https://example.org/a.png").is_ok());
        assert!(required_url("Image", "//evil.example/a.png").is_err());
        assert!(required_url("Image", "javascript:alert(1)").is_err());
        assert!(required_url("Image", "/uploads/a b.png").is_err());

        assert_eq!(optional_url("Cover", Some("  ".into())).unwrap(), None);
        assert_eq!(optional_url("Cover", None).unwrap(), None);
        assert!(optional_url("Cover", Some("nope".into())).is_err());
    }

    #[test]
    fn test_category_name() {
        assert_eq!(CategoryName::new(" Sports ").unwrap().into_inner(), "Sports");
        assert!(CategoryName::new("").is_err());
        assert!(CategoryName::new(&"x".repeat(61)).is_err());
    }

    #[test]
    fn test_event_window() {
        let starts_at = Utc::now();
        let draft = EventDraft {
            title: "Concert".into(),
            description: String::new(),
            location: "Hall".into(),
            starts_at,
            ends_at: Some(starts_at - Duration::minutes(1)),
            cover_image_url: None,
        };
        assert!(draft.clone().validated().is_err());

        let same_instant = EventDraft {
            ends_at: Some(starts_at),
            ..draft
        };
        assert!(same_instant.validated().is_ok());
    }

    #[test]
    fn test_graduation_year_bounds() {
        let draft = |year| AlumnusDraft {
            full_name: "Siti".into(),
            graduation_year: year,
            occupation: String::new(),
            testimonial: String::new(),
            photo_url: None,
        };
        assert!(draft(1900).validated().is_ok());
        assert!(draft(2100).validated().is_ok());
        assert!(draft(1899).validated().is_err());
        assert!(draft(2101).validated().is_err());
    }

    #[test]
    fn test_slide_rules() {
        let slide = SlideDraft {
            title: String::new(),
            image_url: "/uploads/banner.jpg".into(),
            link_url: Some(String::new()),
            position: 0,
            active: true,
        }
        .validated()
        .unwrap();
        assert_eq!(slide.link_url, None);

        let negative = SlideDraft {
            position: -1,
            ..slide
        };
        assert!(negative.validated().is_err());
    }
}
