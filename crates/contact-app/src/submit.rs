//! # Submission Workflow
//!
//! Orchestrates one submit action: guard against re-entry, validate, post
//! through the injected transport, interpret the outcome, notify, and reset.
//!
//! The phase flag is the only concurrency primitive. Frontends disable the
//! submit control while it reads `Submitting`, but the guard here holds even
//! when they don't: a re-entrant call is answered with
//! [`SubmitOutcome::AlreadyInFlight`] before any other work.

use crate::state::FormState;
use crate::validate::validate;
use contact_core::{
    AuthSnapshot, ContactFormData, ContactRequest, ContactTransport, Notifier, SubmissionPhase,
    ValidationErrors, STATUS_CREATED,
};
use futures_signals::signal::Mutable;
use std::sync::Arc;

/// User-facing copy for the success notification.
pub const SUCCESS_NOTICE: &str = "Message sent!";

/// User-facing copy for the failure notification. Every failure class maps
/// to this one generic message; the typed input stays in the form.
pub const FAILURE_NOTICE: &str = "Failed to send the message. Please try again later.";

/// How a call to [`SubmissionController::submit`] concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the message; the form was reset
    Accepted,
    /// Validation failed; errors were stored for display, no request made
    Rejected,
    /// The transport completed without a created status, or failed outright
    Failed,
    /// A submission was already in flight; nothing was done
    AlreadyInFlight,
}

/// Controller owning the form state and the injected collaborators.
///
/// One instance per form view. Shareable across tasks (`&self` methods);
/// the in-flight guard keeps concurrent submits down to one request.
pub struct SubmissionController {
    state: FormState,
    auth: Mutable<AuthSnapshot>,
    notifier: Arc<dyn Notifier>,
    transport: Arc<dyn ContactTransport>,
}

impl SubmissionController {
    /// Build a controller for the given auth snapshot.
    ///
    /// The email prefill is applied here when the snapshot already carries
    /// an identity; later transitions arrive via [`update_auth`].
    ///
    /// [`update_auth`]: SubmissionController::update_auth
    pub fn new(
        auth: AuthSnapshot,
        notifier: Arc<dyn Notifier>,
        transport: Arc<dyn ContactTransport>,
    ) -> Self {
        Self {
            state: FormState::new(&auth),
            auth: Mutable::new(auth),
            notifier,
            transport,
        }
    }

    /// The form state this controller owns.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current auth snapshot.
    pub fn auth(&self) -> AuthSnapshot {
        self.auth.get_cloned()
    }

    /// Feed a fresh auth snapshot from the auth subsystem.
    ///
    /// Forwards to the form's one-time prefill; the latch there keeps
    /// repeated snapshots from re-firing it.
    pub fn update_auth(&self, auth: AuthSnapshot) {
        self.state.observe_auth(&auth);
        self.auth.set(auth);
    }

    /// Run one submit action.
    ///
    /// One user action yields at most one network call: validation failures
    /// return before any transport effect, and a submit while one is in
    /// flight is a no-op. The phase returns to `Idle` on every exit path.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.phase().is_submitting() {
            tracing::debug!("submit ignored: request already in flight");
            return SubmitOutcome::AlreadyInFlight;
        }

        let auth = self.auth.get_cloned();
        let data = self.state.data();

        let errors = validate(&data, &auth);
        if !errors.is_empty() {
            tracing::debug!(failing_fields = errors.len(), "submit rejected by validation");
            self.state.set_errors(errors);
            return SubmitOutcome::Rejected;
        }
        self.state.set_errors(ValidationErrors::new());

        // Armed before the only await point; drops the phase back to Idle on
        // every exit, including unwinding.
        let _guard = PhaseGuard::arm(&self.state);

        let request = ContactRequest::from(&data);
        match self.transport.post_contact(&request).await {
            Ok(STATUS_CREATED) => {
                tracing::debug!("contact message accepted");
                self.notifier.notify_success(SUCCESS_NOTICE);
                self.state.reset(ContactFormData {
                    name: String::new(),
                    email: if auth.is_authenticated {
                        auth.identifier.clone()
                    } else {
                        String::new()
                    },
                    message: String::new(),
                });
                SubmitOutcome::Accepted
            }
            Ok(status) => {
                tracing::warn!(status, "contact endpoint did not accept message");
                self.notifier.notify_failure(FAILURE_NOTICE);
                SubmitOutcome::Failed
            }
            Err(error) => {
                tracing::warn!(%error, "contact transport failed");
                self.notifier.notify_failure(FAILURE_NOTICE);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Guaranteed-cleanup guard for the submission phase.
struct PhaseGuard<'a> {
    state: &'a FormState,
}

impl<'a> PhaseGuard<'a> {
    fn arm(state: &'a FormState) -> Self {
        state.set_phase(SubmissionPhase::Submitting);
        Self { state }
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.state.set_phase(SubmissionPhase::Idle);
    }
}
