//! # Effect Interfaces
//!
//! Pure signatures for the two external collaborators the submission
//! workflow drives. Production handlers live in `contact-transport`;
//! test doubles live in `contact-testkit`.

use crate::errors::Result;
use crate::form::ContactRequest;
use async_trait::async_trait;

/// Status code the endpoint returns when the message was created.
pub const STATUS_CREATED: u16 = 201;

/// One-shot success/failure signal to the user.
///
/// Fire-and-forget: display and dismiss timing are the frontend's concern.
pub trait Notifier: Send + Sync {
    /// Show a success notification.
    fn notify_success(&self, message: &str);

    /// Show a failure notification.
    fn notify_failure(&self, message: &str);
}

/// Opaque async call delivering a contact request to the remote endpoint.
///
/// `Ok(status)` means the HTTP exchange completed with that status code;
/// interpreting the code is the caller's job. `Err` is a transport-level
/// failure (connection refused, timeout, ...).
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Post one contact request. Exactly one attempt, no retries.
    async fn post_contact(&self, request: &ContactRequest) -> Result<u16>;
}
