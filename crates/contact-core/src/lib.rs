//! Contact Core - Domain Types and Effect Interfaces
//!
//! This crate provides the foundational types for the contact form core and
//! the pure effect interfaces that handlers implement. It contains no
//! application logic and no I/O.
//!
//! # Layers
//!
//! - Domain types: `ContactFormData`, `ValidationErrors`, `SubmissionPhase`
//! - Auth snapshot: the two observable outputs of the auth subsystem
//! - Effect interfaces (pure signatures): `Notifier`, `ContactTransport`
//! - Unified error handling: `ContactError`

#![forbid(unsafe_code)]

/// Authentication snapshot consumed by the form core
pub mod auth;

/// Pure effect interfaces (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Form data, validation errors, and submission phase
pub mod form;

pub use auth::AuthSnapshot;
pub use effects::{ContactTransport, Notifier, STATUS_CREATED};
pub use errors::{ContactError, Result};
pub use form::{ContactFormData, ContactRequest, Field, SubmissionPhase, ValidationErrors};
