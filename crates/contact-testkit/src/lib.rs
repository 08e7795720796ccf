//! Contact Testkit - Mock Effect Handlers
//!
//! Test doubles for the `Notifier` and `ContactTransport` interfaces so the
//! submission workflow can be exercised without a display layer or network.

#![forbid(unsafe_code)]

/// Recording notifier double
pub mod notifier;

/// Scripted transport double
pub mod transport;

pub use notifier::RecordingNotifier;
pub use transport::ScriptedTransport;
