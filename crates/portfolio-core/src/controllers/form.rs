use tracing::{debug, error, info};

use super::{Context, Module};
use crate::app::Task;
use crate::error::PortfolioResult;
use crate::form::{validate, ContactMessage, FieldError, SubmissionTransport, SUBMISSION_FAILED_ALERT};
use crate::ports::Node;
use crate::types::FieldName;

/// Contact form: per-field validation and simulated delivery.
pub struct FormManager {
    transport: Box<dyn SubmissionTransport>,
    /// Message waiting for the transport latency to elapse
    pending: Option<ContactMessage>,
}

impl FormManager {
    pub fn new(transport: Box<dyn SubmissionTransport>) -> Self {
        Self {
            transport,
            pending: None,
        }
    }

    fn field_value(cx: &Context<'_>, field: FieldName) -> String {
        cx.doc
            .value(Node::Field(field))
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Validate one field, updating its error display. A field missing from
    /// the document counts as valid.
    pub fn validate_field(&mut self, cx: &mut Context<'_>, field: FieldName) -> bool {
        let node = Node::Field(field);
        if !cx.doc.contains(node) {
            return true;
        }
        let value = cx.doc.value(node).unwrap_or_default();

        self.clear_error(cx, field);
        match validate(field, &value) {
            Ok(()) => true,
            Err(e) => {
                self.show_error(cx, field, e);
                false
            }
        }
    }

    fn show_error(&self, cx: &mut Context<'_>, field: FieldName, err: FieldError) {
        let message = err.to_string();
        cx.doc.set_text(Node::FieldError(field), &message);
        cx.doc.add_class(Node::FieldError(field), "show");
        cx.doc.add_class(Node::Field(field), "error");
    }

    fn clear_error(&self, cx: &mut Context<'_>, field: FieldName) {
        cx.doc.set_text(Node::FieldError(field), "");
        cx.doc.remove_class(Node::FieldError(field), "show");
        cx.doc.remove_class(Node::Field(field), "error");
    }

    /// Validate every field; all of them report, not just the first failure.
    pub fn validate_form(&mut self, cx: &mut Context<'_>) -> bool {
        let mut valid = true;
        for field in FieldName::ALL {
            valid &= self.validate_field(cx, field);
        }
        valid
    }

    /// The user typed into a field. Clears a shown error.
    pub fn on_input(&mut self, cx: &mut Context<'_>, field: FieldName, value: &str) {
        let node = Node::Field(field);
        cx.doc.set_value(node, value);
        if cx.doc.has_class(node, "error") {
            self.clear_error(cx, field);
        }
    }

    pub fn submit(&mut self, cx: &mut Context<'_>) {
        if cx.state.is_loading {
            debug!("Submission already in flight, ignoring");
            return;
        }
        if !cx.doc.contains(Node::ContactForm) {
            return;
        }
        if !self.validate_form(cx) {
            debug!("Contact form has invalid fields");
            return;
        }

        cx.state.is_loading = true;
        cx.doc.set_disabled(Node::SubmitButton, true);
        cx.doc.set_style(Node::SubmitText, "display", "none");
        cx.doc.set_style(Node::SubmitLoading, "display", "inline");

        self.pending = Some(ContactMessage {
            name: Self::field_value(cx, FieldName::Name),
            email: Self::field_value(cx, FieldName::Email),
            subject: Self::field_value(cx, FieldName::Subject),
            message: Self::field_value(cx, FieldName::Message),
        });
        let latency = self
            .transport
            .latency()
            .unwrap_or_else(|| cx.config.submission_delay());
        cx.timers.schedule_after(latency, Task::SubmissionSettled);
    }

    /// The transport latency elapsed: deliver and restore the control.
    pub fn settle(&mut self, cx: &mut Context<'_>) {
        let Some(message) = self.pending.take() else {
            return;
        };

        match self.transport.deliver(&message) {
            Ok(()) => {
                info!("Contact message sent");
                self.show_success(cx);
            }
            Err(e) => {
                error!(error = %e, "Form submission error");
                cx.doc.alert(SUBMISSION_FAILED_ALERT);
            }
        }

        cx.state.is_loading = false;
        cx.doc.set_disabled(Node::SubmitButton, false);
        cx.doc.set_style(Node::SubmitText, "display", "inline");
        cx.doc.set_style(Node::SubmitLoading, "display", "none");
    }

    fn show_success(&mut self, cx: &mut Context<'_>) {
        cx.doc.set_style(Node::ContactForm, "display", "none");
        cx.doc.set_style(Node::ContactSuccess, "display", "block");
        for field in FieldName::ALL {
            cx.doc.set_value(Node::Field(field), "");
        }
        cx.timers
            .schedule_after(cx.config.success_display(), Task::HideSuccess);
    }

    pub fn hide_success(&mut self, cx: &mut Context<'_>) {
        cx.doc.set_style(Node::ContactSuccess, "display", "none");
        cx.doc.set_style(Node::ContactForm, "display", "grid");
    }
}

impl Module for FormManager {
    fn name(&self) -> &'static str {
        "form"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        if !cx.doc.contains(Node::ContactForm) {
            debug!("No contact form on the page");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::controllers::test_support::Harness;
    use crate::form::SimulatedTransport;
    use crate::ports::Document;

    fn manager() -> (FormManager, crate::form::Outbox) {
        let transport = SimulatedTransport::new(Duration::from_millis(1500));
        let outbox = transport.outbox();
        (FormManager::new(Box::new(transport)), outbox)
    }

    fn fill(h: &mut Harness, form: &mut FormManager, message: &str) {
        form.on_input(&mut h.cx(), FieldName::Name, "Ada");
        form.on_input(&mut h.cx(), FieldName::Email, "ada@example.com");
        form.on_input(&mut h.cx(), FieldName::Message, message);
    }

    #[test]
    fn blur_shows_error_and_input_clears_it() {
        let mut h = Harness::new();
        let (mut form, _) = manager();

        assert!(!form.validate_field(&mut h.cx(), FieldName::Email));
        assert_eq!(h.doc.text(Node::FieldError(FieldName::Email)), Some("This field is required."));
        assert!(h.doc.has_class(Node::FieldError(FieldName::Email), "show"));
        assert!(h.doc.has_class(Node::Field(FieldName::Email), "error"));

        form.on_input(&mut h.cx(), FieldName::Email, "a");
        assert!(!h.doc.has_class(Node::Field(FieldName::Email), "error"));
        assert_eq!(h.doc.text(Node::FieldError(FieldName::Email)), Some(""));
    }

    #[test]
    fn invalid_form_reports_every_field() {
        let mut h = Harness::new();
        let (mut form, outbox) = manager();
        form.on_input(&mut h.cx(), FieldName::Message, "short");

        form.submit(&mut h.cx());
        assert!(!h.state.is_loading);
        assert!(h.doc.has_class(Node::Field(FieldName::Name), "error"));
        assert!(h.doc.has_class(Node::Field(FieldName::Email), "error"));
        assert!(!h.doc.has_class(Node::Field(FieldName::Subject), "error"));
        assert_eq!(
            h.doc.text(Node::FieldError(FieldName::Message)),
            Some("Message must be at least 10 characters long.")
        );
        assert_eq!(h.timers.pending_timers(), 0);
        assert!(outbox.is_empty());
    }

    #[test]
    fn valid_submit_enters_loading_state() {
        let mut h = Harness::new();
        let (mut form, _) = manager();
        fill(&mut h, &mut form, "Hello there, nice site!");

        form.submit(&mut h.cx());
        assert!(h.state.is_loading);
        assert!(h.doc.is_disabled(Node::SubmitButton));
        assert_eq!(h.doc.style(Node::SubmitText, "display"), Some("none"));
        assert_eq!(h.doc.style(Node::SubmitLoading, "display"), Some("inline"));
        assert_eq!(h.due(Duration::from_millis(1500)), vec![Task::SubmissionSettled]);
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut h = Harness::new();
        let (mut form, _) = manager();
        fill(&mut h, &mut form, "Hello there, nice site!");

        form.submit(&mut h.cx());
        form.submit(&mut h.cx());
        assert_eq!(h.timers.pending_timers(), 1);
    }

    #[test]
    fn settle_delivers_trimmed_message_and_resets() {
        let mut h = Harness::new();
        let (mut form, outbox) = manager();
        form.on_input(&mut h.cx(), FieldName::Name, "  Ada  ");
        form.on_input(&mut h.cx(), FieldName::Email, "ada@example.com");
        form.on_input(&mut h.cx(), FieldName::Message, "Hello there, nice site!");

        form.submit(&mut h.cx());
        form.settle(&mut h.cx());

        assert_eq!(outbox.messages()[0].name, "Ada");
        assert!(!h.state.is_loading);
        assert!(!h.doc.is_disabled(Node::SubmitButton));
        assert_eq!(h.doc.style(Node::ContactForm, "display"), Some("none"));
        assert_eq!(h.doc.style(Node::ContactSuccess, "display"), Some("block"));
        assert_eq!(h.doc.value(Node::Field(FieldName::Name)).as_deref(), Some(""));

        assert_eq!(h.due(Duration::from_millis(5000)), vec![Task::HideSuccess]);
        form.hide_success(&mut h.cx());
        assert_eq!(h.doc.style(Node::ContactForm, "display"), Some("grid"));
        assert_eq!(h.doc.style(Node::ContactSuccess, "display"), Some("none"));
    }

    #[test]
    fn failed_delivery_alerts_and_releases_latch() {
        let mut h = Harness::new();
        let transport = SimulatedTransport::failing(Duration::from_millis(10), "offline");
        let mut form = FormManager::new(Box::new(transport));
        fill(&mut h, &mut form, "Hello there, nice site!");

        form.submit(&mut h.cx());
        form.settle(&mut h.cx());

        assert_eq!(h.doc.alerts(), &[SUBMISSION_FAILED_ALERT.to_string()]);
        assert!(!h.state.is_loading);
        assert_eq!(h.doc.style(Node::SubmitText, "display"), Some("inline"));
        assert_eq!(h.doc.style(Node::ContactSuccess, "display"), Some("none"));
    }
}
