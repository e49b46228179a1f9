//! The form engine.
//!
//! A [`FormSession`] is one live instance of a form: it owns the field values
//! and the status of the latest submission, and runs the pipeline
//!
//! ```text
//! set_field ─▶ FormState ─▶ presence check ─▶ to_payload ─▶ RequestOrchestrator ─▶ SubmissionStatus
//! ```
//!
//! Status changes are published on a [`watch`] channel so a front end can
//! show progress while a request is pending.

use log::{debug, warn};
use tokio::sync::watch;

use crate::{
    client::RequestOrchestrator,
    error::{Result, SubmitError},
    forms::FormDescriptor,
    outcome::{RequestOutcome, SubmissionStatus},
    payload::{to_payload, SubmissionPayload},
    state::FormState,
};

/// One form instance: values plus latest submission status.
///
/// `submit` borrows the session mutably, so a second submission cannot start
/// while one is in flight.
#[derive(Debug)]
pub struct FormSession {
    descriptor: &'static FormDescriptor,
    state: FormState,
    status: watch::Sender<SubmissionStatus>,
}

impl FormSession {
    pub fn new(descriptor: &'static FormDescriptor) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            descriptor,
            state: FormState::for_form(descriptor),
            status,
        }
    }

    pub fn descriptor(&self) -> &'static FormDescriptor {
        self.descriptor
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Overwrites one field. Does not touch the submission status.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.state.set_field(name, value)
    }

    pub fn is_submittable(&self) -> bool {
        self.state.is_submittable()
    }

    /// Payload the current values would be sent as.
    pub fn payload(&self) -> SubmissionPayload {
        to_payload(&self.state, &self.descriptor.model)
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Receiver that observes every status change of this session.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Validates, maps and sends the current values.
    ///
    /// A form with a blank required field fails with the form's validation
    /// message and sends nothing. Otherwise the status is `Pending` until the
    /// orchestrator resolves, then becomes `Success` or `Failure`; the
    /// previous outcome is discarded either way.
    pub async fn submit(&mut self, orchestrator: &RequestOrchestrator) -> SubmissionStatus {
        if !self.state.is_submittable() {
            let missing: Vec<&str> = self
                .state
                .missing_required()
                .iter()
                .map(|spec| spec.name)
                .collect();
            warn!(
                "{} form not submitted, missing required fields: {}",
                self.descriptor.name,
                missing.join(", ")
            );
            self.status.send_replace(SubmissionStatus::Failure(SubmitError::Validation(
                self.descriptor.validation_message.to_string(),
            )));
            return self.status();
        }

        let payload = self.payload();
        debug!("{} form payload: {payload}", self.descriptor.name);

        let pending = PendingGuard::start(&self.status);
        let outcome = orchestrator.submit(self.descriptor, &payload).await;
        pending.settle(outcome);

        self.status()
    }
}

/// Holds a session in `Pending` for the duration of one request.
///
/// If the submitting future is dropped before the request settles, the
/// status goes back to `Idle` so the form never stays stuck in loading.
struct PendingGuard<'a> {
    status: &'a watch::Sender<SubmissionStatus>,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn start(status: &'a watch::Sender<SubmissionStatus>) -> Self {
        status.send_replace(SubmissionStatus::Pending);
        Self {
            status,
            settled: false,
        }
    }

    fn settle(mut self, outcome: RequestOutcome) {
        self.status.send_replace(outcome.into());
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.status.send_replace(SubmissionStatus::Idle);
        }
    }
}
