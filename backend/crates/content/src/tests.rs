//! Handler flow tests for the content crate
//!
//! Both routers are mounted the way the API binary mounts them and driven
//! with `tower::ServiceExt::oneshot` against an in-memory store.

#[cfg(test)]
mod support {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use tower::ServiceExt;

    use crate::application::config::UploadConfig;
    use crate::infra::memory::MemoryContentRepository;
    use crate::presentation::router::{admin_router_generic, public_router_generic};

    pub struct TestApp {
        pub router: Router,
        pub upload_dir: PathBuf,
    }

    impl TestApp {
        pub fn new() -> Self {
            Self::with_upload_config(|_| {})
        }

        pub fn with_upload_config(tweak: impl FnOnce(&mut UploadConfig)) -> Self {
            let upload_dir =
                std::env::temp_dir().join(format!("content-uploads-{}", uuid::Uuid::new_v4()));
            let mut config = UploadConfig::with_dir(&upload_dir);
            tweak(&mut config);
            let config = Arc::new(config);

            let repo = MemoryContentRepository::default();
            let router = Router::new()
                .nest("/api", public_router_generic(repo.clone(), config.clone()))
                .nest("/api/admin", admin_router_generic(repo, config));

            Self { router, upload_dir }
        }

        pub async fn send(&self, req: Request<Body>) -> Response<Body> {
            self.router.clone().oneshot(req).await.unwrap()
        }

        /// Send and decode, asserting the status
        pub async fn call(&self, req: Request<Body>, status: u16) -> serde_json::Value {
            let res = self.send(req).await;
            assert_eq!(res.status(), status);
            body_json(res).await
        }

        /// Create through the admin API and return the new id
        pub async fn create(&self, uri: &str, body: serde_json::Value) -> String {
            let created = self.call(json_request("POST", uri, body), 201).await;
            created["data"]["id"].as_str().unwrap().to_string()
        }
    }

    impl Drop for TestApp {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.upload_dir);
        }
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub const BOUNDARY: &str = "XBOUNDARYX";

    /// `(field name, file name, content type, bytes)`; a `None` file name is
    /// a plain text field
    pub fn multipart_request(
        uri: &str,
        parts: &[(&str, Option<&str>, &str, &[u8])],
    ) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content_type, bytes) in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match file_name {
                Some(file_name) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                            name, file_name
                        )
                        .as_bytes(),
                    );
                    if !content_type.is_empty() {
                        body.extend_from_slice(
                            format!("Content-Type: {}\r\n", content_type).as_bytes(),
                        );
                    }
                    body.extend_from_slice(b"\r\n");
                }
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                ),
            }
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    pub async fn body_json(res: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

#[cfg(test)]
mod news_tests {
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_duplicate_category_conflicts() {
        let app = TestApp::new();
        app.create("/api/admin/categories", json!({ "name": "Sports" }))
            .await;

        let body = app
            .call(
                json_request("POST", "/api/admin/categories", json!({ "name": "sports" })),
                409,
            )
            .await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Category 'sports' already exists");

        let list = app.call(get_request("/api/categories"), 200).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_category_name_rejected() {
        let app = TestApp::new();
        app.call(
            json_request("POST", "/api/admin/categories", json!({ "name": "   " })),
            400,
        )
        .await;
    }

    #[tokio::test]
    async fn test_drafts_hidden_until_published() {
        let app = TestApp::new();
        let id = app
            .create(
                "/api/admin/news",
                json!({ "title": "Graduation 2026", "body": "Congratulations" }),
            )
            .await;

        let public = app.call(get_request("/api/news"), 200).await;
        assert!(public["data"].as_array().unwrap().is_empty());
        app.call(get_request(&format!("/api/news/{}", id)), 404).await;

        let admin = app.call(get_request("/api/admin/news"), 200).await;
        assert_eq!(admin["data"].as_array().unwrap().len(), 1);
        assert!(admin["data"][0]["publishedAt"].is_null());

        let updated = app
            .call(
                json_request(
                    "PUT",
                    &format!("/api/admin/news/{}", id),
                    json!({ "title": "Graduation 2026", "published": true }),
                ),
                200,
            )
            .await;
        assert!(updated["data"]["publishedAt"].is_string());

        let article = app.call(get_request(&format!("/api/news/{}", id)), 200).await;
        assert_eq!(article["data"]["title"], "Graduation 2026");
    }

    #[tokio::test]
    async fn test_news_filtered_by_category() {
        let app = TestApp::new();
        let sports = app
            .create("/api/admin/categories", json!({ "name": "Sports" }))
            .await;

        app.create(
            "/api/admin/news",
            json!({ "title": "Match day", "categoryId": sports, "published": true }),
        )
        .await;
        app.create(
            "/api/admin/news",
            json!({ "title": "Library hours", "categoryId": "", "published": true }),
        )
        .await;

        let all = app.call(get_request("/api/news"), 200).await;
        assert_eq!(all["data"].as_array().unwrap().len(), 2);

        let filtered = app
            .call(get_request(&format!("/api/news?category={}", sports)), 200)
            .await;
        let filtered = filtered["data"].as_array().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["title"], "Match day");

        app.call(get_request("/api/news?category=not-a-uuid"), 400)
            .await;
    }

    #[tokio::test]
    async fn test_unknown_category_rejected() {
        let app = TestApp::new();
        let body = app
            .call(
                json_request(
                    "POST",
                    "/api/admin/news",
                    json!({ "title": "Orphan", "categoryId": uuid::Uuid::new_v4() }),
                ),
                400,
            )
            .await;
        assert_eq!(body["message"], "Category does not exist");
    }

    #[tokio::test]
    async fn test_deleting_category_uncategorizes_articles() {
        let app = TestApp::new();
        let category = app
            .create("/api/admin/categories", json!({ "name": "Clubs" }))
            .await;
        let article = app
            .create(
                "/api/admin/news",
                json!({ "title": "Chess club", "categoryId": category }),
            )
            .await;

        let res = app
            .send(delete_request(&format!("/api/admin/categories/{}", category)))
            .await;
        assert_eq!(res.status(), 204);

        let body = app
            .call(get_request(&format!("/api/admin/news/{}", article)), 200)
            .await;
        assert!(body["data"]["categoryId"].is_null());
    }

    #[tokio::test]
    async fn test_missing_title_and_bad_id() {
        let app = TestApp::new();
        app.call(
            json_request("POST", "/api/admin/news", json!({ "body": "no title" })),
            400,
        )
        .await;
        app.call(get_request("/api/news/12345"), 400).await;

        let res = app.send(delete_request("/api/admin/news/not-an-id")).await;
        assert_eq!(res.status(), 400);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = TestApp::new();
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/admin/news")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{ not json"))
            .unwrap();
        let res = app.send(req).await;
        assert_eq!(res.status(), 400);
    }
}

#[cfg(test)]
mod event_tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_event_cannot_end_before_start() {
        let app = TestApp::new();
        let start = Utc::now() + Duration::days(3);
        app.call(
            json_request(
                "POST",
                "/api/admin/events",
                json!({
                    "title": "Concert",
                    "startsAt": start.to_rfc3339(),
                    "endsAt": (start - Duration::hours(1)).to_rfc3339(),
                }),
            ),
            400,
        )
        .await;
    }

    #[tokio::test]
    async fn test_upcoming_filter() {
        let app = TestApp::new();
        let now = Utc::now();

        app.create(
            "/api/admin/events",
            json!({ "title": "Past fair", "startsAt": (now - Duration::days(10)).to_rfc3339() }),
        )
        .await;
        app.create(
            "/api/admin/events",
            json!({
                "title": "Week-long camp",
                "startsAt": (now - Duration::days(2)).to_rfc3339(),
                "endsAt": (now + Duration::days(2)).to_rfc3339(),
            }),
        )
        .await;
        app.create(
            "/api/admin/events",
            json!({ "title": "Open day", "startsAt": (now + Duration::days(5)).to_rfc3339() }),
        )
        .await;

        let all = app.call(get_request("/api/events"), 200).await;
        assert_eq!(all["data"].as_array().unwrap().len(), 3);
        assert_eq!(all["data"][0]["title"], "Past fair");

        let upcoming = app.call(get_request("/api/events?upcoming=true"), 200).await;
        let titles: Vec<&str> = upcoming["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Week-long camp", "Open day"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_event() {
        let app = TestApp::new();
        let start = Utc::now() + Duration::days(1);
        let id = app
            .create(
                "/api/admin/events",
                json!({ "title": "Choir", "startsAt": start.to_rfc3339() }),
            )
            .await;

        let updated = app
            .call(
                json_request(
                    "PUT",
                    &format!("/api/admin/events/{}", id),
                    json!({ "title": "Choir recital", "location": "Hall A", "startsAt": start.to_rfc3339() }),
                ),
                200,
            )
            .await;
        assert_eq!(updated["data"]["location"], "Hall A");

        let res = app
            .send(delete_request(&format!("/api/admin/events/{}", id)))
            .await;
        assert_eq!(res.status(), 204);
        app.call(get_request(&format!("/api/events/{}", id)), 404).await;
    }
}

#[cfg(test)]
mod gallery_tests {
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_album_with_media_and_cascade() {
        let app = TestApp::new();
        let album = app
            .create("/api/admin/gallery", json!({ "title": "Sports day" }))
            .await;

        let media = app
            .create(
                &format!("/api/admin/gallery/{}/media", album),
                json!({ "url": "/uploads/abc.jpg", "caption": "Relay" }),
            )
            .await;
        app.create(
            &format!("/api/admin/gallery/{}/media", album),
            json!({ "url": "https://video.example.com/v/1", "mediaType": "video" }),
        )
        .await;

        let body = app
            .call(get_request(&format!("/api/gallery/{}", album)), 200)
            .await;
        assert_eq!(body["data"]["title"], "Sports day");
        let items = body["data"]["media"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["mediaType"], "image");
        assert_eq!(items[1]["mediaType"], "video");

        let res = app
            .send(delete_request(&format!("/api/admin/gallery/{}", album)))
            .await;
        assert_eq!(res.status(), 204);

        app.call(get_request(&format!("/api/gallery/{}", album)), 404)
            .await;
        let res = app
            .send(delete_request(&format!("/api/admin/gallery/media/{}", media)))
            .await;
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn test_media_needs_existing_album_and_valid_url() {
        let app = TestApp::new();
        app.call(
            json_request(
                "POST",
                &format!("/api/admin/gallery/{}/media", uuid::Uuid::new_v4()),
                json!({ "url": "/uploads/x.png" }),
            ),
            404,
        )
        .await;

        let album = app
            .create("/api/admin/gallery", json!({ "title": "Trip" }))
            .await;
        app.call(
            json_request(
                "POST",
                &format!("/api/admin/gallery/{}/media", album),
                json!({ "url": "javascript:alert(1)" }),
            ),
            400,
        )
        .await;
        app.call(
            json_request(
                "POST",
                &format!("/api/admin/gallery/{}/media", album),
                json!({ "url": "/uploads/x.png", "mediaType": "audio" }),
            ),
            400,
        )
        .await;
    }
}

#[cfg(test)]
mod alumni_tests {
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_year_filter_and_ordering() {
        let app = TestApp::new();
        for (name, year) in [("Budi", 2019), ("Ani", 2021), ("Citra", 2021)] {
            app.create(
                "/api/admin/alumni",
                json!({ "fullName": name, "graduationYear": year }),
            )
            .await;
        }

        let all = app.call(get_request("/api/alumni"), 200).await;
        let names: Vec<&str> = all["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["fullName"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Ani", "Citra", "Budi"]);

        let class = app.call(get_request("/api/alumni?year=2019"), 200).await;
        assert_eq!(class["data"].as_array().unwrap().len(), 1);
        assert_eq!(class["data"][0]["fullName"], "Budi");
    }

    #[tokio::test]
    async fn test_graduation_year_out_of_range() {
        let app = TestApp::new();
        app.call(
            json_request(
                "POST",
                "/api/admin/alumni",
                json!({ "fullName": "Time Traveller", "graduationYear": 1850 }),
            ),
            400,
        )
        .await;
    }
}

#[cfg(test)]
mod site_tests {
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_profile_defaults_then_saves() {
        let app = TestApp::new();

        let empty = app.call(get_request("/api/profile"), 200).await;
        assert_eq!(empty["data"]["about"], "");
        assert_eq!(empty["data"]["vision"], "");
        assert!(empty["data"]["updatedAt"].is_null());

        app.call(
            json_request(
                "PUT",
                "/api/admin/profile",
                json!({ "about": "Founded 1975", "vision": "Learning for all" }),
            ),
            200,
        )
        .await;

        let saved = app.call(get_request("/api/profile"), 200).await;
        assert_eq!(saved["data"]["about"], "Founded 1975");
        assert_eq!(saved["data"]["mission"], "");
        assert!(saved["data"]["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_public_slides_are_active_and_ordered() {
        let app = TestApp::new();
        app.create(
            "/api/admin/slides",
            json!({ "title": "Second", "imageUrl": "/uploads/2.jpg", "position": 2 }),
        )
        .await;
        app.create(
            "/api/admin/slides",
            json!({ "title": "First", "imageUrl": "/uploads/1.jpg", "position": 1 }),
        )
        .await;
        let hidden = app
            .create(
                "/api/admin/slides",
                json!({ "title": "Hidden", "imageUrl": "/uploads/0.jpg", "active": false }),
            )
            .await;

        let public = app.call(get_request("/api/slides"), 200).await;
        let titles: Vec<&str> = public["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["First", "Second"]);

        let admin = app.call(get_request("/api/admin/slides"), 200).await;
        assert_eq!(admin["data"].as_array().unwrap().len(), 3);
        assert_eq!(admin["data"][0]["id"], hidden.as_str());
    }

    #[tokio::test]
    async fn test_slide_requires_image_and_position() {
        let app = TestApp::new();
        app.call(
            json_request("POST", "/api/admin/slides", json!({ "title": "No image" })),
            400,
        )
        .await;
        app.call(
            json_request(
                "POST",
                "/api/admin/slides",
                json!({ "imageUrl": "/uploads/a.jpg", "position": -1 }),
            ),
            400,
        )
        .await;
    }
}

#[cfg(test)]
mod upload_tests {
    use super::support::*;

    #[tokio::test]
    async fn test_upload_list_and_delete() {
        let app = TestApp::new();

        let body = app
            .call(
                multipart_request(
                    "/api/admin/uploads",
                    &[
                        ("title", None, "", b"ignored".as_slice()),
                        ("file", Some("Team Photo.PNG"), "image/png", b"\x89PNG fake".as_slice()),
                    ],
                ),
                201,
            )
            .await;

        let uploads = body["data"].as_array().unwrap();
        assert_eq!(uploads.len(), 1);
        let upload = &uploads[0];
        assert_eq!(upload["originalName"], "Team Photo.PNG");
        assert_eq!(upload["mimeType"], "image/png");
        assert_eq!(upload["sizeBytes"], 9);

        let file_name = upload["fileName"].as_str().unwrap();
        assert!(file_name.ends_with(".png"));
        assert_eq!(upload["url"], format!("/uploads/{}", file_name));
        let path = app.upload_dir.join(file_name);
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG fake");

        let list = app.call(get_request("/api/admin/uploads"), 200).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 1);

        let id = upload["id"].as_str().unwrap();
        let res = app
            .send(delete_request(&format!("/api/admin/uploads/{}", id)))
            .await;
        assert_eq!(res.status(), 204);
        assert!(!path.exists());

        let res = app
            .send(delete_request(&format!("/api/admin/uploads/{}", id)))
            .await;
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn test_missing_mime_type_defaults() {
        let app = TestApp::new();
        let body = app
            .call(
                multipart_request(
                    "/api/admin/uploads",
                    &[("file", Some("notes.txt"), "", b"hello".as_slice())],
                ),
                201,
            )
            .await;
        assert_eq!(body["data"][0]["mimeType"], "application/octet-stream");
    }

    #[tokio::test]
    async fn test_oversized_file_rejected() {
        let app = TestApp::with_upload_config(|config| config.max_file_bytes = 16);

        let res = app
            .send(multipart_request(
                "/api/admin/uploads",
                &[("file", Some("big.bin"), "application/octet-stream", [0u8; 64].as_slice())],
            ))
            .await;
        assert_eq!(res.status(), 413);
        let body = body_json(res).await;
        assert_eq!(body["success"], false);

        let list = app.call(get_request("/api/admin/uploads"), 200).await;
        assert!(list["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_request_without_files_rejected() {
        let app = TestApp::new();
        app.call(
            multipart_request("/api/admin/uploads", &[("title", None, "", b"just text".as_slice())]),
            400,
        )
        .await;
    }
}
