//! Scripted transport for driving the submission workflow in tests.

use async_trait::async_trait;
use contact_core::{ContactError, ContactRequest, ContactTransport, Result, STATUS_CREATED};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::Semaphore;

/// In-memory transport that replays a scripted sequence of outcomes.
///
/// Every request body is recorded before the scripted outcome is returned.
/// A gated transport holds each request open until [`release`] is called,
/// which lets tests observe the in-flight window.
///
/// [`release`]: ScriptedTransport::release
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<u16>>>,
    requests: Mutex<Vec<ContactRequest>>,
    gate: Semaphore,
}

impl ScriptedTransport {
    /// Transport scripted with the given outcomes, ungated.
    pub fn with_responses(responses: impl IntoIterator<Item = Result<u16>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            gate: Semaphore::new(Semaphore::MAX_PERMITS),
        }
    }

    /// Single resource-created response.
    pub fn created() -> Self {
        Self::with_responses([Ok(STATUS_CREATED)])
    }

    /// Single response with an arbitrary status code.
    pub fn status(status: u16) -> Self {
        Self::with_responses([Ok(status)])
    }

    /// Single transport-level failure.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_responses([Err(ContactError::network(message))])
    }

    /// Hold every request until [`release`] grants it passage.
    ///
    /// [`release`]: ScriptedTransport::release
    pub fn gated(self) -> Self {
        // Drain the open gate; requests now queue on release().
        self.gate.forget_permits(Semaphore::MAX_PERMITS);
        self
    }

    /// Let one held request proceed.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    /// Request bodies seen so far, in arrival order.
    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests seen so far (including held ones).
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl ContactTransport for ScriptedTransport {
    async fn post_contact(&self, request: &ContactRequest) -> Result<u16> {
        self.requests.lock().push(request.clone());

        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| ContactError::internal(format!("transport gate closed: {e}")))?;
        permit.forget();

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ContactError::internal("no scripted response left")))
    }
}
