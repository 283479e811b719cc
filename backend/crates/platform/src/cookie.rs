//! Cookie Management Infrastructure
//!
//! Building `Set-Cookie` values and reading cookies back from requests.

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    ///
    /// Attribute order: `name=value; HttpOnly; Path; SameSite; Max-Age; Secure`.
    pub fn build_set_cookie(&self, value: &str) -> String {
        self.render(value, self.max_age_secs)
    }

    /// Build a Set-Cookie value that makes the browser drop the cookie
    pub fn build_delete_cookie(&self) -> String {
        self.render("", Some(0))
    }

    fn render(&self, value: &str, max_age: Option<u64>) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        cookie.push_str(&format!("; Path={}", self.path));
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        if let Some(max_age) = max_age {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        if self.secure {
            cookie.push_str("; Secure");
        }

        cookie
    }

    pub fn set_cookie_header(&self, value: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.build_set_cookie(value))
    }

    pub fn delete_cookie_header(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.build_delete_cookie())
    }
}

/// Extract a cookie value from headers
///
/// Looks through every `Cookie` header; an empty value counts as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}
