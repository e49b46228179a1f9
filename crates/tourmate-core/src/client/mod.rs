//! Requests to the generation service.
//!
//! The [`RequestOrchestrator`] turns one [`SubmissionPayload`] into exactly one
//! POST against the form's endpoint and folds every way that can end into a
//! [`RequestOutcome`]:
//!
//! ```text
//! POST {base_url}{endpoint}  ──▶ 2xx  ──▶ body[response_key] or fallback ──▶ Success
//!                            ├─▶ 4xx/5xx ──▶ body.detail or "HTTP error! Status: N" ──▶ Failure
//!                            └─▶ transport / unreadable body ──▶ Failure
//! ```
//!
//! Nothing is retried and no timeout is applied.
//!
//! # Usage
//!
//! ```no_run
//! use tourmate_core::{forms::SUMMARIZER, FormSession, OrchestratorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = OrchestratorBuilder::new()
//!     .with_base_url(Some("http://localhost:8000"))
//!     .build()?;
//!
//! let mut session = FormSession::new(&SUMMARIZER);
//! session.set_field("text-content", "Three days in Lisbon...")?;
//! let status = session.submit(&orchestrator).await;
//! if let Some(summary) = status.result() {
//!     println!("{summary}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;

use log::{debug, warn};
use serde_json::Value;

pub use builder::OrchestratorBuilder;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};

use crate::{
    error::SubmitError, forms::FormDescriptor, outcome::RequestOutcome, payload::SubmissionPayload,
};

/// Sends form submissions to the service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RequestOrchestrator {
    config: ApiConfig,
    http: reqwest::Client,
}

impl RequestOrchestrator {
    pub(crate) fn new(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Posts `payload` to the endpoint of `form` and waits for the outcome.
    ///
    /// Never fails as a call: every error becomes a
    /// [`RequestOutcome::Failure`].
    pub async fn submit(&self, form: &FormDescriptor, payload: &SubmissionPayload) -> RequestOutcome {
        let url = self.config.endpoint_url(form.endpoint);
        debug!("POST {url} ({} form)", form.name);

        match self.post(&url, form, payload).await {
            Ok(text) => {
                debug!("{} form received {} bytes of text", form.name, text.len());
                RequestOutcome::Success(text)
            }
            Err(err) => {
                warn!("{} form request to {url} failed: {err:?}", form.name);
                RequestOutcome::Failure(err)
            }
        }
    }

    async fn post(
        &self,
        url: &str,
        form: &FormDescriptor,
        payload: &SubmissionPayload,
    ) -> Result<String, SubmitError> {
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Service {
                status: status.as_u16(),
                message: service_message(status.as_u16(), &body),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(generated_text(&body, form.response_key)
            .unwrap_or(form.fallback)
            .to_string())
    }
}

/// Message for a non-success response.
///
/// Uses the body's `detail` field when it carries something readable and
/// falls back to the status code otherwise.
pub fn service_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|body| body.get("detail").and_then(detail_text))
        .unwrap_or_else(|| format!("HTTP error! Status: {status}"))
}

// `detail` is usually a string; request validation failures list one object
// per offending field instead.
fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) if !items.is_empty() => {
            let parts: Vec<String> = items.iter().map(validation_item_text).collect();
            Some(parts.join("; "))
        }
        Value::Null | Value::String(_) | Value::Array(_) => None,
        other => Some(other.to_string()),
    }
}

fn validation_item_text(item: &Value) -> String {
    let message = item.get("msg").and_then(Value::as_str);
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str);
    match (field, message) {
        (Some(field), Some(message)) => format!("{field}: {message}"),
        (None, Some(message)) => message.to_string(),
        _ => item.to_string(),
    }
}

/// The non-empty string under `key`, if any.
pub fn generated_text<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
