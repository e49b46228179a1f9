//! Service location.

use reqwest::Url;

use crate::error::{ConfigResultExt, Result, TourmateError};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the base URL.
pub const BASE_URL_ENV: &str = "TOURMATE_API_BASE_URL";

/// Where the generation service lives.
///
/// Resolved once at startup and handed to the
/// [`RequestOrchestrator`](super::RequestOrchestrator); nothing reads the
/// environment after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validates `base_url` and strips trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns `TourmateError::Configuration` if the value is not an absolute
    /// http(s) URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let url = Url::parse(trimmed).config_context(format!("Invalid API base URL '{trimmed}'"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TourmateError::configuration(format!(
                "API base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Reads [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`] when it is
    /// unset or blank.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path such as `/guide/packing-safety/`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://api.example.com/tourmate//").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/tourmate");
        assert_eq!(
            config.endpoint_url("/financial/budget-helper/"),
            "https://api.example.com/tourmate/financial/budget-helper/"
        );
    }

    #[test]
    fn test_rejects_invalid_urls() {
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(TourmateError::Configuration { .. })
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(TourmateError::Configuration { .. })
        ));
    }
}
