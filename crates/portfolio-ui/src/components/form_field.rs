//! Contact Form Field
//!
//! Label, control and error slot for one contact form field. The control is
//! an `input` or a `textarea` depending on the field kind.

use dioxus::prelude::*;
use portfolio_core::{FieldKind, FieldName};

/// `type` attribute for single-line controls
pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Text | FieldKind::TextArea => "text",
    }
}

/// Class list of the control, marking fields that failed validation
pub fn control_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input error"
    } else {
        "form-input"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    pub field: FieldName,
    pub value: String,
    /// Error text; empty when the field is valid
    #[props(default)]
    pub error: String,
    #[props(default = false)]
    pub has_error: bool,
    #[props(default = false)]
    pub disabled: bool,
    pub oninput: EventHandler<String>,
    pub onblur: EventHandler<()>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormField {
///         field: FieldName::Email,
///         value: doc.value(Node::Field(FieldName::Email)).unwrap_or_default(),
///         oninput: move |v| send(UiEvent::FieldInput { field: FieldName::Email, value: v }),
///         onblur: move |_| send(UiEvent::FieldBlurred(FieldName::Email)),
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let id = field.as_str();
    let error_id = field.error_id();
    let class = control_class(props.has_error);
    let error_class = if props.error.is_empty() {
        "form-error"
    } else {
        "form-error show"
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}",
                "{field.label()}"
                if field.required() {
                    span { class: "form-required", " *" }
                }
            }
            if field.kind() == FieldKind::TextArea {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    class: "{class}",
                    rows: "5",
                    required: field.required(),
                    disabled: props.disabled,
                    "aria-describedby": "{error_id}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onblur: move |_| props.onblur.call(()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    class: "{class}",
                    r#type: input_type(field.kind()),
                    required: field.required(),
                    disabled: props.disabled,
                    "aria-describedby": "{error_id}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onblur: move |_| props.onblur.call(()),
                }
            }
            span { id: "{error_id}", class: "{error_class}", role: "alert", "{props.error}" }
        }
    }
}
