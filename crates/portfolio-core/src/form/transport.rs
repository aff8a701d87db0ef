use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PortfolioError, PortfolioResult};

/// Text shown when delivery fails
pub const SUBMISSION_FAILED_ALERT: &str =
    "Sorry, there was an error sending your message. Please try again later.";

/// The trimmed contents of a valid contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Delivers contact messages.
///
/// The app waits [`SubmissionTransport::latency`] on its own clock before
/// calling [`SubmissionTransport::deliver`], so implementations stay
/// synchronous. `None` means the configured `submission_delay_ms`, read at
/// submit time.
pub trait SubmissionTransport {
    fn latency(&self) -> Option<Duration>;
    fn deliver(&mut self, message: &ContactMessage) -> PortfolioResult<()>;
}

/// Shared record of delivered messages
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl Outbox {
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().clone()
    }
}

/// Accepts every message after a fixed delay without contacting anything.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Option<Duration>,
    outbox: Outbox,
    fail_with: Option<String>,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::configured()
        }
    }

    /// Waits whatever the app's config says at the time of each submit.
    pub fn configured() -> Self {
        Self {
            delay: None,
            outbox: Outbox::default(),
            fail_with: None,
        }
    }

    /// A transport that rejects every message with `reason`.
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            ..Self::new(delay)
        }
    }

    /// Handle on the delivered messages; stays valid after the transport is
    /// moved into the app.
    pub fn outbox(&self) -> Outbox {
        self.outbox.clone()
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn latency(&self) -> Option<Duration> {
        self.delay
    }

    fn deliver(&mut self, message: &ContactMessage) -> PortfolioResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(PortfolioError::Submission(reason.clone()));
        }
        debug!(from = %message.email, "simulated delivery");
        self.outbox.messages.lock().push(message.clone());
        Ok(())
    }
}
