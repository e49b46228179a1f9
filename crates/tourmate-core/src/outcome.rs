//! Submission outcomes and the status a form displays.

use std::fmt;

use crate::error::SubmitError;

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(String),
    Failure(SubmitError),
}

impl From<Result<String, SubmitError>> for RequestOutcome {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(text) => RequestOutcome::Success(text),
            Err(err) => RequestOutcome::Failure(err),
        }
    }
}

/// What a form currently shows.
///
/// Only the latest attempt is kept. Because loading, result and error are
/// variants of one type, a pending form can never also show a result or an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    Success(String),
    Failure(SubmitError),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Generated text of the latest successful attempt.
    pub fn result(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Banner of the latest failed attempt.
    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            SubmissionStatus::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// True once an attempt has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Success(_) | SubmissionStatus::Failure(_)
        )
    }
}

impl From<RequestOutcome> for SubmissionStatus {
    fn from(outcome: RequestOutcome) -> Self {
        match outcome {
            RequestOutcome::Success(text) => SubmissionStatus::Success(text),
            RequestOutcome::Failure(err) => SubmissionStatus::Failure(err),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => Ok(()),
            SubmissionStatus::Pending => write!(f, "Loading..."),
            SubmissionStatus::Success(text) => write!(f, "{text}"),
            SubmissionStatus::Failure(err) => write!(f, "{err}"),
        }
    }
}
