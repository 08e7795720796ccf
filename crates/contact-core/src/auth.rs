//! # Authentication Snapshot
//!
//! The form core consumes exactly two observable outputs of the external
//! auth subsystem: the login flag and the user identifier. It never writes
//! back.

use serde::{Deserialize, Serialize};

/// Read-only view of the auth subsystem at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    /// Whether the visitor is logged in
    pub is_authenticated: bool,
    /// The user identifier (an email-shaped ID); empty when anonymous
    pub identifier: String,
}

impl AuthSnapshot {
    /// Snapshot for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Snapshot for a logged-in visitor with the given identifier.
    pub fn authenticated(identifier: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            identifier: identifier.into(),
        }
    }

    /// True when both the login flag and the identifier are usable.
    ///
    /// The email prefill keys off this, not off `is_authenticated` alone:
    /// a logged-in session without an identifier has nothing to prefill.
    pub fn has_identity(&self) -> bool {
        self.is_authenticated && !self.identifier.is_empty()
    }
}
