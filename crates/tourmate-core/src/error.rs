//! Error types for the TourMate client library.

use std::fmt;

use thiserror::Error;

/// Errors raised by the library itself: misuse of a form, bad configuration
/// or payload serialization problems.
///
/// Failures of a submission attempt are not library errors; they are carried
/// as [`SubmitError`] inside the submission outcome.
#[derive(Error, Debug)]
pub enum TourmateError {
    /// A field name that the form's model does not declare
    #[error("Form '{form}' has no field named '{field}'")]
    UnknownField { form: String, field: String },
    /// A form name that is not part of the catalog
    #[error("Unknown form '{0}'")]
    UnknownForm(String),
    /// Configuration errors (base URL, HTTP client construction)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating unknown-field errors.
pub struct UnknownFieldBuilder {
    form: String,
}

impl UnknownFieldBuilder {
    /// Create a new unknown-field error builder for a form.
    pub fn new(form: impl Into<String>) -> Self {
        Self { form: form.into() }
    }

    /// Build the error for the given field name.
    pub fn with_field(self, field: impl Into<String>) -> TourmateError {
        TourmateError::UnknownField {
            form: self.form,
            field: field.into(),
        }
    }
}

impl TourmateError {
    /// Creates a builder for unknown-field errors.
    pub fn unknown_field(form: impl Into<String>) -> UnknownFieldBuilder {
        UnknownFieldBuilder::new(form)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait for Result to attach configuration context.
pub trait ConfigResultExt<T> {
    /// Map any error into a configuration error prefixed with `context`.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TourmateError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Why a submission attempt did not produce a result.
///
/// All three kinds are displayed the same way, as a banner that the next
/// submission clears. Validation banners carry the form's own message;
/// service and transport banners are prefixed with `Error: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field was blank; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The service answered with a non-success status.
    #[error("Error: {message}")]
    Service { status: u16, message: String },
    /// The request could not complete or the response was unreadable.
    #[error("Error: {0}")]
    Transport(String),
}

impl SubmitError {
    /// The message without the banner prefix.
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Validation(message)
            | SubmitError::Service { message, .. }
            | SubmitError::Transport(message) => message,
        }
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, TourmateError>;
