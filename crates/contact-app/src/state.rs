//! # Form State
//!
//! Reactive state for a single form instance: current field values, the
//! errors from the last submit attempt, and the submission phase. Each piece
//! lives in a `Mutable` so frontends can subscribe instead of polling.
//!
//! Fields are never validated as they are typed; errors only change on
//! submit.

use contact_core::{AuthSnapshot, ContactFormData, Field, SubmissionPhase, ValidationErrors};
use futures_signals::signal::{Mutable, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

/// State owned by one contact form, spanning the lifetime of its view.
pub struct FormState {
    data: Mutable<ContactFormData>,
    errors: Mutable<ValidationErrors>,
    phase: Mutable<SubmissionPhase>,
    /// Latch for the one-time email prefill.
    prefilled: AtomicBool,
}

impl FormState {
    /// Empty form, prefilled from `auth` when it already carries an identity.
    pub fn new(auth: &AuthSnapshot) -> Self {
        let state = Self {
            data: Mutable::new(ContactFormData::new()),
            errors: Mutable::new(ValidationErrors::new()),
            phase: Mutable::new(SubmissionPhase::Idle),
            prefilled: AtomicBool::new(false),
        };
        state.observe_auth(auth);
        state
    }

    // =========================================================================
    // Field values
    // =========================================================================

    /// Snapshot of the current field values.
    pub fn data(&self) -> ContactFormData {
        self.data.get_cloned()
    }

    /// Write one field, preserving the others.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.data.lock_mut().set_field(field, value);
    }

    /// Replace the whole record (post-success reset path).
    pub(crate) fn reset(&self, data: ContactFormData) {
        self.data.set(data);
    }

    /// Subscribe to field value changes.
    pub fn data_signal(&self) -> impl Signal<Item = ContactFormData> {
        self.data.signal_cloned()
    }

    // =========================================================================
    // Validation errors
    // =========================================================================

    /// Errors from the most recent submit attempt.
    pub fn errors(&self) -> ValidationErrors {
        self.errors.get_cloned()
    }

    pub(crate) fn set_errors(&self, errors: ValidationErrors) {
        self.errors.set(errors);
    }

    /// Subscribe to error map changes.
    pub fn errors_signal(&self) -> impl Signal<Item = ValidationErrors> {
        self.errors.signal_cloned()
    }

    // =========================================================================
    // Submission phase
    // =========================================================================

    /// Current submission phase; frontends disable the submit control while
    /// this reads `Submitting`.
    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    pub(crate) fn set_phase(&self, phase: SubmissionPhase) {
        self.phase.set(phase);
    }

    /// Subscribe to phase changes.
    pub fn phase_signal(&self) -> impl Signal<Item = SubmissionPhase> {
        self.phase.signal()
    }

    // =========================================================================
    // Auth prefill
    // =========================================================================

    /// React to an auth snapshot.
    ///
    /// The first time a snapshot with a usable identity is observed, the
    /// email field is prefilled with the identifier if it is still empty.
    /// Later observations are no-ops: the latch makes this an idempotent
    /// subscription, not a per-render effect.
    pub fn observe_auth(&self, auth: &AuthSnapshot) {
        if !auth.has_identity() {
            return;
        }
        if self.prefilled.swap(true, Ordering::SeqCst) {
            return;
        }
        let mut data = self.data.lock_mut();
        if data.email.is_empty() {
            data.email = auth.identifier.clone();
        }
    }
}
