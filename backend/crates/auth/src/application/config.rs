//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Minimum token secret length accepted outside debug builds
pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Cookie carrying the JWT
    pub cookie_name: String,
    /// HMAC-SHA256 key for signing tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime, also used as the cookie Max-Age (2 hours)
    pub token_ttl: Duration,
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Where unauthenticated page requests are sent
    pub login_page: String,
    /// Path prefixes the route guard protects
    pub protected_prefixes: Vec<String>,
    /// Exact paths under a protected prefix that stay public
    pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(2 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_pepper: None,
            login_page: "/admin/login".to_string(),
            protected_prefixes: vec!["/admin".to_string(), "/api/admin".to_string()],
            public_paths: vec!["/admin/login".to_string(), "/api/auth/login".to_string()],
        }
    }
}

impl AuthConfig {
    /// Config with a fixed signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(MIN_SECRET_LENGTH))
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }

    /// Cookie attributes for the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.cookie_name, "token");
        assert_eq!(config.token_ttl_secs(), 7200);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.token_secret.len(), MIN_SECRET_LENGTH);
        assert_ne!(config.token_secret, AuthConfig::development().token_secret);
    }

    #[test]
    fn test_cookie_attributes() {
        let config = AuthConfig::development();
        assert_eq!(
            config.cookie().build_set_cookie("jwt"),
            "token=jwt; HttpOnly; Path=/; SameSite=Strict; Max-Age=7200"
        );
    }
}
