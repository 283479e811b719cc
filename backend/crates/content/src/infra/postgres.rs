//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AlbumId, AlumnusId, CategoryId, EventId, MediaId, NewsId, SlideId, UploadId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    Album, Alumnus, Category, Event, Media, MediaType, NewsArticle, SiteProfile, Slide, Upload,
};
use crate::domain::repository::{
    AlumniRepository, CategoryRepository, EventRepository, GalleryRepository, NewsFilter,
    NewsRepository, ProfileRepository, SlideRepository, UploadRepository,
};
use crate::error::{ContentError, ContentResult};

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// UPDATE that matched nothing
fn ensure_updated(rows: u64, what: &'static str) -> ContentResult<()> {
    if rows == 0 {
        return Err(ContentError::NotFound(what));
    }
    Ok(())
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgContentRepository {
    async fn list_categories(&self) -> ContentResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, name, created_at FROM categories ORDER BY lower(name)",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_category(&self, id: &CategoryId) -> ContentResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, name, created_at FROM categories WHERE category_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn create_category(&self, category: &Category) -> ContentResult<()> {
        sqlx::query("INSERT INTO categories (category_id, name, created_at) VALUES ($1, $2, $3)")
            .bind(category.id.as_uuid())
            .bind(&category.name)
            .bind(category.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_category(&self, id: &CategoryId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// News Repository Implementation
// ============================================================================

const NEWS_COLUMNS: &str = r#"
    news_id,
    title,
    summary,
    body,
    cover_image_url,
    category_id,
    published,
    published_at,
    created_at,
    updated_at
"#;

impl NewsRepository for PgContentRepository {
    async fn list_news(&self, filter: NewsFilter) -> ContentResult<Vec<NewsArticle>> {
        let sql = format!(
            r#"
            SELECT {NEWS_COLUMNS}
            FROM news_articles
            WHERE ($1 = FALSE OR published)
              AND ($2::uuid IS NULL OR category_id = $2)
            ORDER BY COALESCE(published_at, created_at) DESC
            "#
        );

        let rows = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(filter.published_only)
            .bind(filter.category_id.map(|id| id.into_uuid()))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(NewsRow::into_article).collect())
    }

    async fn find_news(&self, id: &NewsId) -> ContentResult<Option<NewsArticle>> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news_articles WHERE news_id = $1");

        let row = sqlx::query_as::<_, NewsRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(NewsRow::into_article))
    }

    async fn create_news(&self, article: &NewsArticle) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO news_articles (
                news_id,
                title,
                summary,
                body,
                cover_image_url,
                category_id,
                published,
                published_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(article.id.as_uuid())
        .bind(&article.title)
        .bind(&article.summary)
        .bind(&article.body)
        .bind(&article.cover_image_url)
        .bind(article.category_id.map(|id| id.into_uuid()))
        .bind(article.published)
        .bind(article.published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_news(&self, article: &NewsArticle) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE news_articles SET
                title = $2,
                summary = $3,
                body = $4,
                cover_image_url = $5,
                category_id = $6,
                published = $7,
                published_at = $8,
                updated_at = $9
            WHERE news_id = $1
            "#,
        )
        .bind(article.id.as_uuid())
        .bind(&article.title)
        .bind(&article.summary)
        .bind(&article.body)
        .bind(&article.cover_image_url)
        .bind(article.category_id.map(|id| id.into_uuid()))
        .bind(article.published)
        .bind(article.published_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        ensure_updated(result.rows_affected(), "News article")
    }

    async fn delete_news(&self, id: &NewsId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM news_articles WHERE news_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Event Repository Implementation
// ============================================================================

const EVENT_COLUMNS: &str = r#"
    event_id,
    title,
    description,
    location,
    starts_at,
    ends_at,
    cover_image_url,
    created_at,
    updated_at
"#;

impl EventRepository for PgContentRepository {
    async fn list_events(&self, upcoming_from: Option<DateTime<Utc>>) -> ContentResult<Vec<Event>> {
        let sql = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE $1::timestamptz IS NULL OR COALESCE(ends_at, starts_at) >= $1
            ORDER BY starts_at ASC
            "#
        );

        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(upcoming_from)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    async fn find_event(&self, id: &EventId) -> ContentResult<Option<Event>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1");

        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(EventRow::into_event))
    }

    async fn create_event(&self, event: &Event) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (
                event_id,
                title,
                description,
                location,
                starts_at,
                ends_at,
                cover_image_url,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.cover_image_url)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_event(&self, event: &Event) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                description = $3,
                location = $4,
                starts_at = $5,
                ends_at = $6,
                cover_image_url = $7,
                updated_at = $8
            WHERE event_id = $1
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.cover_image_url)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        ensure_updated(result.rows_affected(), "Event")
    }

    async fn delete_event(&self, id: &EventId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Gallery Repository Implementation
// ============================================================================

impl GalleryRepository for PgContentRepository {
    async fn list_albums(&self) -> ContentResult<Vec<Album>> {
        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT album_id, title, description, cover_image_url, created_at, updated_at
            FROM gallery_albums
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AlbumRow::into_album).collect())
    }

    async fn find_album(&self, id: &AlbumId) -> ContentResult<Option<Album>> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT album_id, title, description, cover_image_url, created_at, updated_at
            FROM gallery_albums
            WHERE album_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AlbumRow::into_album))
    }

    async fn create_album(&self, album: &Album) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO gallery_albums (
                album_id, title, description, cover_image_url, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(album.id.as_uuid())
        .bind(&album.title)
        .bind(&album.description)
        .bind(&album.cover_image_url)
        .bind(album.created_at)
        .bind(album.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_album(&self, album: &Album) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE gallery_albums SET
                title = $2,
                description = $3,
                cover_image_url = $4,
                updated_at = $5
            WHERE album_id = $1
            "#,
        )
        .bind(album.id.as_uuid())
        .bind(&album.title)
        .bind(&album.description)
        .bind(&album.cover_image_url)
        .bind(album.updated_at)
        .execute(&self.pool)
        .await?;

        ensure_updated(result.rows_affected(), "Album")
    }

    async fn delete_album(&self, id: &AlbumId) -> ContentResult<bool> {
        // gallery_media rows go with it (ON DELETE CASCADE)
        let deleted = sqlx::query("DELETE FROM gallery_albums WHERE album_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list_media(&self, album_id: &AlbumId) -> ContentResult<Vec<Media>> {
        let rows = sqlx::query_as::<_, MediaRow>(
            r#"
            SELECT media_id, album_id, url, caption, media_type, created_at
            FROM gallery_media
            WHERE album_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(album_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MediaRow::into_media).collect()
    }

    async fn add_media(&self, media: &Media) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO gallery_media (
                media_id, album_id, url, caption, media_type, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(media.id.as_uuid())
        .bind(media.album_id.as_uuid())
        .bind(&media.url)
        .bind(&media.caption)
        .bind(media.media_type.as_str())
        .bind(media.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_media(&self, id: &MediaId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM gallery_media WHERE media_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Alumni Repository Implementation
// ============================================================================

const ALUMNI_COLUMNS: &str = r#"
    alumnus_id,
    full_name,
    graduation_year,
    occupation,
    testimonial,
    photo_url,
    created_at,
    updated_at
"#;

impl AlumniRepository for PgContentRepository {
    async fn list_alumni(&self, graduation_year: Option<i32>) -> ContentResult<Vec<Alumnus>> {
        let sql = format!(
            r#"
            SELECT {ALUMNI_COLUMNS}
            FROM alumni
            WHERE $1::int IS NULL OR graduation_year = $1
            ORDER BY graduation_year DESC, full_name ASC
            "#
        );

        let rows = sqlx::query_as::<_, AlumnusRow>(&sql)
            .bind(graduation_year)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AlumnusRow::into_alumnus).collect())
    }

    async fn find_alumnus(&self, id: &AlumnusId) -> ContentResult<Option<Alumnus>> {
        let sql = format!("SELECT {ALUMNI_COLUMNS} FROM alumni WHERE alumnus_id = $1");

        let row = sqlx::query_as::<_, AlumnusRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(AlumnusRow::into_alumnus))
    }

    async fn create_alumnus(&self, alumnus: &Alumnus) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO alumni (
                alumnus_id,
                full_name,
                graduation_year,
                occupation,
                testimonial,
                photo_url,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(alumnus.id.as_uuid())
        .bind(&alumnus.full_name)
        .bind(alumnus.graduation_year)
        .bind(&alumnus.occupation)
        .bind(&alumnus.testimonial)
        .bind(&alumnus.photo_url)
        .bind(alumnus.created_at)
        .bind(alumnus.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_alumnus(&self, alumnus: &Alumnus) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE alumni SET
                full_name = $2,
                graduation_year = $3,
                occupation = $4,
                testimonial = $5,
                photo_url = $6,
                updated_at = $7
            WHERE alumnus_id = $1
            "#,
        )
        .bind(alumnus.id.as_uuid())
        .bind(&alumnus.full_name)
        .bind(alumnus.graduation_year)
        .bind(&alumnus.occupation)
        .bind(&alumnus.testimonial)
        .bind(&alumnus.photo_url)
        .bind(alumnus.updated_at)
        .execute(&self.pool)
        .await?;

        ensure_updated(result.rows_affected(), "Alumnus")
    }

    async fn delete_alumnus(&self, id: &AlumnusId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM alumni WHERE alumnus_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgContentRepository {
    async fn get_profile(&self) -> ContentResult<Option<SiteProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT about, vision, mission, updated_at FROM site_profile WHERE profile_id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn save_profile(&self, profile: &SiteProfile) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO site_profile (profile_id, about, vision, mission, updated_at)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (profile_id) DO UPDATE SET
                about = EXCLUDED.about,
                vision = EXCLUDED.vision,
                mission = EXCLUDED.mission,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&profile.about)
        .bind(&profile.vision)
        .bind(&profile.mission)
        .bind(profile.updated_at.unwrap_or_else(Utc::now))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Slide Repository Implementation
// ============================================================================

const SLIDE_COLUMNS: &str = r#"
    slide_id,
    title,
    image_url,
    link_url,
    position,
    active,
    created_at,
    updated_at
"#;

impl SlideRepository for PgContentRepository {
    async fn list_slides(&self, active_only: bool) -> ContentResult<Vec<Slide>> {
        let sql = format!(
            r#"
            SELECT {SLIDE_COLUMNS}
            FROM slides
            WHERE $1 = FALSE OR active
            ORDER BY position ASC, created_at ASC
            "#
        );

        let rows = sqlx::query_as::<_, SlideRow>(&sql)
            .bind(active_only)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(SlideRow::into_slide).collect())
    }

    async fn find_slide(&self, id: &SlideId) -> ContentResult<Option<Slide>> {
        let sql = format!("SELECT {SLIDE_COLUMNS} FROM slides WHERE slide_id = $1");

        let row = sqlx::query_as::<_, SlideRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(SlideRow::into_slide))
    }

    async fn create_slide(&self, slide: &Slide) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO slides (
                slide_id,
                title,
                image_url,
                link_url,
                position,
                active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(slide.id.as_uuid())
        .bind(&slide.title)
        .bind(&slide.image_url)
        .bind(&slide.link_url)
        .bind(slide.position)
        .bind(slide.active)
        .bind(slide.created_at)
        .bind(slide.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_slide(&self, slide: &Slide) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE slides SET
                title = $2,
                image_url = $3,
                link_url = $4,
                position = $5,
                active = $6,
                updated_at = $7
            WHERE slide_id = $1
            "#,
        )
        .bind(slide.id.as_uuid())
        .bind(&slide.title)
        .bind(&slide.image_url)
        .bind(&slide.link_url)
        .bind(slide.position)
        .bind(slide.active)
        .bind(slide.updated_at)
        .execute(&self.pool)
        .await?;

        ensure_updated(result.rows_affected(), "Slide")
    }

    async fn delete_slide(&self, id: &SlideId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM slides WHERE slide_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Upload Repository Implementation
// ============================================================================

const UPLOAD_COLUMNS: &str = r#"
    upload_id,
    file_name,
    original_name,
    size_bytes,
    mime_type,
    url,
    created_at
"#;

impl UploadRepository for PgContentRepository {
    async fn list_uploads(&self) -> ContentResult<Vec<Upload>> {
        let sql = format!("SELECT {UPLOAD_COLUMNS} FROM uploads ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, UploadRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UploadRow::into_upload).collect())
    }

    async fn find_upload(&self, id: &UploadId) -> ContentResult<Option<Upload>> {
        let sql = format!("SELECT {UPLOAD_COLUMNS} FROM uploads WHERE upload_id = $1");

        let row = sqlx::query_as::<_, UploadRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UploadRow::into_upload))
    }

    async fn create_upload(&self, upload: &Upload) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO uploads (
                upload_id,
                file_name,
                original_name,
                size_bytes,
                mime_type,
                url,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(upload.id.as_uuid())
        .bind(&upload.file_name)
        .bind(&upload.original_name)
        .bind(upload.size_bytes)
        .bind(&upload.mime_type)
        .bind(&upload.url)
        .bind(upload.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_upload(&self, id: &UploadId) -> ContentResult<bool> {
        let deleted = sqlx::query("DELETE FROM uploads WHERE upload_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::from_uuid(self.category_id),
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NewsRow {
    news_id: Uuid,
    title: String,
    summary: String,
    body: String,
    cover_image_url: Option<String>,
    category_id: Option<Uuid>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewsRow {
    fn into_article(self) -> NewsArticle {
        NewsArticle {
            id: NewsId::from_uuid(self.news_id),
            title: self.title,
            summary: self.summary,
            body: self.body,
            cover_image_url: self.cover_image_url,
            category_id: self.category_id.map(CategoryId::from_uuid),
            published: self.published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    event_id: Uuid,
    title: String,
    description: String,
    location: String,
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    cover_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            id: EventId::from_uuid(self.event_id),
            title: self.title,
            description: self.description,
            location: self.location,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            cover_image_url: self.cover_image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AlbumRow {
    album_id: Uuid,
    title: String,
    description: String,
    cover_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AlbumRow {
    fn into_album(self) -> Album {
        Album {
            id: AlbumId::from_uuid(self.album_id),
            title: self.title,
            description: self.description,
            cover_image_url: self.cover_image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MediaRow {
    media_id: Uuid,
    album_id: Uuid,
    url: String,
    caption: String,
    media_type: String,
    created_at: DateTime<Utc>,
}

impl MediaRow {
    fn into_media(self) -> ContentResult<Media> {
        let media_type: MediaType = self
            .media_type
            .parse()
            .map_err(|e| ContentError::Internal(format!("Invalid media_type: {}", e)))?;

        Ok(Media {
            id: MediaId::from_uuid(self.media_id),
            album_id: AlbumId::from_uuid(self.album_id),
            url: self.url,
            caption: self.caption,
            media_type,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AlumnusRow {
    alumnus_id: Uuid,
    full_name: String,
    graduation_year: i32,
    occupation: String,
    testimonial: String,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AlumnusRow {
    fn into_alumnus(self) -> Alumnus {
        Alumnus {
            id: AlumnusId::from_uuid(self.alumnus_id),
            full_name: self.full_name,
            graduation_year: self.graduation_year,
            occupation: self.occupation,
            testimonial: self.testimonial,
            photo_url: self.photo_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    about: String,
    vision: String,
    mission: String,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> SiteProfile {
        SiteProfile {
            about: self.about,
            vision: self.vision,
            mission: self.mission,
            updated_at: Some(self.updated_at),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SlideRow {
    slide_id: Uuid,
    title: String,
    image_url: String,
    link_url: Option<String>,
    position: i32,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SlideRow {
    fn into_slide(self) -> Slide {
        Slide {
            id: SlideId::from_uuid(self.slide_id),
            title: self.title,
            image_url: self.image_url,
            link_url: self.link_url,
            position: self.position,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UploadRow {
    upload_id: Uuid,
    file_name: String,
    original_name: String,
    size_bytes: i64,
    mime_type: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl UploadRow {
    fn into_upload(self) -> Upload {
        Upload {
            id: UploadId::from_uuid(self.upload_id),
            file_name: self.file_name,
            original_name: self.original_name,
            size_bytes: self.size_bytes,
            mime_type: self.mime_type,
            url: self.url,
            created_at: self.created_at,
        }
    }
}
