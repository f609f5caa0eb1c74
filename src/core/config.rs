use std::env;
use std::fmt;

use crate::errors::TestimonialError;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Clone, Default)]
pub struct AppConfig {
    pub database_url: Option<String>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup(DATABASE_URL_VAR).filter(|v| !v.is_empty()),
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigMissing` when no connection string was configured.
    pub fn database_url(&self) -> Result<&str, TestimonialError> {
        self.database_url
            .as_deref()
            .ok_or(TestimonialError::ConfigMissing)
    }
}
