//! Recording notifier for assertions on toast traffic.

use contact_core::Notifier;
use parking_lot::Mutex;

/// Captures every notification instead of displaying it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All success messages, in call order.
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().clone()
    }

    /// All failure messages, in call order.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    /// Number of success notifications seen.
    pub fn success_count(&self) -> usize {
        self.successes.lock().len()
    }

    /// Number of failure notifications seen.
    pub fn failure_count(&self) -> usize {
        self.failures.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.successes.lock().push(message.to_string());
    }

    fn notify_failure(&self, message: &str) {
        self.failures.lock().push(message.to_string());
    }
}
