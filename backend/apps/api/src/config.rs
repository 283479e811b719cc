//! Process Configuration
//!
//! Everything the binary reads from the environment, resolved once at
//! startup.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::MIN_SECRET_LENGTH;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// Account created at startup when none exists for its email
#[derive(Clone)]
pub struct AdminSeed {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub admin_seed: Option<AdminSeed>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `development` relaxes the secret requirements: a missing `JWT_SECRET`
    /// gets a random per-process secret and cookies default to insecure.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        development: bool,
    ) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:31113")?;

        let upload_dir = PathBuf::from(var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.into()));

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let mut auth = match var("JWT_SECRET") {
            Some(secret) => {
                if secret.len() < MIN_SECRET_LENGTH {
                    if !development {
                        bail!("JWT_SECRET must be at least {MIN_SECRET_LENGTH} bytes");
                    }
                    tracing::warn!(
                        length = secret.len(),
                        "JWT_SECRET is shorter than {} bytes",
                        MIN_SECRET_LENGTH
                    );
                }
                AuthConfig {
                    cookie_secure: !development,
                    ..AuthConfig::with_secret(secret.into_bytes())
                }
            }
            None if development => {
                tracing::warn!("JWT_SECRET not set, using a random secret; sessions end on restart");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set"),
        };

        if let Some(secure) = var("COOKIE_SECURE") {
            auth.cookie_secure = parse_bool(&secure)
                .with_context(|| format!("COOKIE_SECURE must be true or false, got '{secure}'"))?;
        }

        let admin_seed = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email,
                password,
                name: var("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            upload_dir,
            frontend_origins,
            auth,
            admin_seed,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://localhost/site"), ("JWT_SECRET", SECRET)]),
            false,
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 31113);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.auth.token_secret, SECRET.as_bytes());
        assert!(config.auth.cookie_secure);
        assert!(config.admin_seed.is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(AppConfig::from_lookup(lookup(&[("JWT_SECRET", SECRET)]), true).is_err());
    }

    #[test]
    fn test_secret_rules() {
        let db = ("DATABASE_URL", "postgres://localhost/site");

        assert!(AppConfig::from_lookup(lookup(&[db]), false).is_err());
        assert!(AppConfig::from_lookup(lookup(&[db, ("JWT_SECRET", "short")]), false).is_err());

        let dev = AppConfig::from_lookup(lookup(&[db]), true).unwrap();
        assert_eq!(dev.auth.token_secret.len(), MIN_SECRET_LENGTH);
        assert!(!dev.auth.cookie_secure);
    }

    #[test]
    fn test_cookie_secure_override() {
        let config = AppConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://localhost/site"),
                ("JWT_SECRET", SECRET),
                ("COOKIE_SECURE", "false"),
            ]),
            false,
        )
        .unwrap();
        assert!(!config.auth.cookie_secure);

        assert!(
            AppConfig::from_lookup(
                lookup(&[
                    ("DATABASE_URL", "postgres://localhost/site"),
                    ("JWT_SECRET", SECRET),
                    ("COOKIE_SECURE", "maybe"),
                ]),
                false,
            )
            .is_err()
        );
    }

    #[test]
    fn test_admin_seed_needs_email_and_password() {
        let base = [
            ("DATABASE_URL", "postgres://localhost/site"),
            ("JWT_SECRET", SECRET),
        ];

        let config = AppConfig::from_lookup(
            lookup(&[base[0], base[1], ("ADMIN_EMAIL", "admin2@example.com")]),
            false,
        )
        .unwrap();
        assert!(config.admin_seed.is_none());

        let config = AppConfig::from_lookup(
            lookup(&[
                base[0],
                base[1],
                ("ADMIN_EMAIL", "admin2@example.com"),
                ("ADMIN_PASSWORD", "admin123"),
            ]),
            false,
        )
        .unwrap();
        let seed = config.admin_seed.unwrap();
        assert_eq!(seed.name, "Administrator");
        assert!(!format!("{:?}", seed).contains("admin123"));
    }
}
