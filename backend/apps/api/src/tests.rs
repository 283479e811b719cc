//! Composition tests for the served router
//!
//! The full route tree is built over in-memory stores and driven with
//! `tower::ServiceExt::oneshot`, so the guard is checked against the real
//! mounting order.

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use auth::AuthConfig;
    use auth::application::ManageAccountsUseCase;
    use auth::infra::MemoryAccountRepository;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use content::UploadConfig;
    use content::infra::MemoryContentRepository;
    use tower::ServiceExt;

    use crate::routes::app_router;

    pub const ADMIN_EMAIL: &str = "admin@example.org";
    pub const ADMIN_PASSWORD: &str = "correct horse battery";

    pub struct TestApp {
        pub router: Router,
    }

    impl TestApp {
        pub async fn new() -> Self {
            let config = Arc::new(AuthConfig::development());
            let accounts = MemoryAccountRepository::default();

            ManageAccountsUseCase::new(Arc::new(accounts.clone()), config.clone())
                .bootstrap(ADMIN_EMAIL, "Site Admin", ADMIN_PASSWORD.to_string())
                .await
                .unwrap();

            let uploads = Arc::new(UploadConfig::with_dir(
                std::env::temp_dir().join("api-composition-uploads"),
            ));

            Self {
                router: app_router(accounts, MemoryContentRepository::default(), config, uploads),
            }
        }

        pub async fn send(&self, req: Request<Body>) -> Response<Body> {
            self.router.clone().oneshot(req).await.unwrap()
        }

        /// Log in and return the `token=<jwt>` pair for a Cookie header
        pub async fn login_cookie(&self) -> String {
            let body = serde_json::json!({
                "email": ADMIN_EMAIL,
                "password": ADMIN_PASSWORD,
            });
            let req = Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();

            let res = self.send(req).await;
            assert_eq!(res.status(), 200);
            let set_cookie = res.headers().get(header::SET_COOKIE).unwrap();
            set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap()
                .to_string()
        }
    }

    pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    pub fn location(res: &Response<Body>) -> Option<&str> {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod guard_composition_tests {
    use axum::http::StatusCode;

    use super::support::*;

    #[tokio::test]
    async fn test_public_routes_open_without_cookie() {
        let app = TestApp::new().await;

        for uri in ["/api/news", "/api/events", "/api/slides", "/admin/login"] {
            let res = app.send(get_request(uri, None)).await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_admin_api_rejected_without_cookie() {
        let app = TestApp::new().await;

        for uri in ["/api/admin/news", "/api/admin/accounts", "/api/admin/zzz"] {
            let res = app.send(get_request(uri, None)).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{uri}");
            assert!(location(&res).is_none());
        }
    }

    #[tokio::test]
    async fn test_admin_pages_redirect_without_cookie() {
        let app = TestApp::new().await;

        for uri in ["/admin", "/admin/zzz"] {
            let res = app.send(get_request(uri, None)).await;
            assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
            assert_eq!(location(&res), Some("/admin/login"));
        }
    }

    #[tokio::test]
    async fn test_unknown_public_path_is_not_found() {
        let app = TestApp::new().await;

        let res = app.send(get_request("/api/zzz", None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_cookie_opens_every_protected_mount() {
        let app = TestApp::new().await;
        let cookie = app.login_cookie().await;

        for uri in [
            "/api/admin/news",
            "/api/admin/slides",
            "/api/admin/uploads",
            "/api/admin/accounts",
            "/api/auth/me",
            "/admin",
        ] {
            let res = app.send(get_request(uri, Some(&cookie))).await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_admin_path_with_cookie_is_not_found() {
        let app = TestApp::new().await;
        let cookie = app.login_cookie().await;

        let res = app.send(get_request("/api/admin/zzz", Some(&cookie))).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
