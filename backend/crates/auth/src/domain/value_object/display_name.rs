//! Display Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const DISPLAY_NAME_MAX_CHARS: usize = 100;

/// Human-readable name shown on the dashboard and in the session projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl AsRef<str>) -> AppResult<Self> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        if name.chars().count() > DISPLAY_NAME_MAX_CHARS {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                DISPLAY_NAME_MAX_CHARS
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
