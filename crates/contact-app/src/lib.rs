//! Contact App - Headless Form Core
//!
//! Portable application core for the contact form: reactive field state,
//! submit-time validation, and the guarded submission workflow. Frontends
//! render from the signals this crate exposes and call back into
//! [`SubmissionController`]; nothing here touches a display layer or a
//! socket directly.
//!
//! # Flow
//!
//! ```text
//! edit → FormState::set_field
//! submit → guard → validate → transport → notify → reset → Idle
//! ```
//!
//! The display layer, the auth subsystem, the toast mechanism, and the HTTP
//! transport are all external: the first two are consumed through
//! [`contact_core::AuthSnapshot`], the latter two injected as
//! [`contact_core::Notifier`] and [`contact_core::ContactTransport`].

#![forbid(unsafe_code)]

/// Reactive form state with the one-time auth prefill
pub mod state;

/// Guarded submission workflow
pub mod submit;

/// Submit-time validation rules
pub mod validate;

pub use state::FormState;
pub use submit::{SubmissionController, SubmitOutcome, FAILURE_NOTICE, SUCCESS_NOTICE};
pub use validate::validate;
