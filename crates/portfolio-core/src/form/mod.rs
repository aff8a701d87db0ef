//! Contact form validation and delivery.

mod transport;
mod validation;

pub use transport::{
    ContactMessage, Outbox, SimulatedTransport, SubmissionTransport, SUBMISSION_FAILED_ALERT,
};
pub use validation::{validate, FieldError, MIN_MESSAGE_LEN};
