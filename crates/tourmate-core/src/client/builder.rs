//! Builder for creating and configuring RequestOrchestrator instances.

use super::{ApiConfig, RequestOrchestrator};
use crate::error::{ConfigResultExt, Result};

/// Builder for creating and configuring [`RequestOrchestrator`] instances.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorBuilder {
    base_url: Option<String>,
}

impl OrchestratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Sets the service base URL.
    ///
    /// If not specified, the `TOURMATE_API_BASE_URL` environment variable is
    /// used, then `http://localhost:8000`.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Builds the configured orchestrator.
    ///
    /// # Errors
    ///
    /// Returns `TourmateError::Configuration` if the base URL is invalid or
    /// the HTTP client cannot be created.
    pub fn build(self) -> Result<RequestOrchestrator> {
        let config = match self.base_url {
            Some(base_url) => ApiConfig::new(base_url)?,
            None => ApiConfig::from_env()?,
        };

        // No request timeout: a submission resolves only when the transport does.
        let http = reqwest::Client::builder()
            .user_agent(concat!("tourmate/", env!("CARGO_PKG_VERSION")))
            .build()
            .config_context("Failed to create HTTP client")?;

        Ok(RequestOrchestrator::new(config, http))
    }
}
