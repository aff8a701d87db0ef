//! Button Components
//!
//! - Primary: filled call to action
//! - Secondary: outlined companion action
//! - Close: the modal's `×`

use dioxus::prelude::*;

use super::join_classes;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// button, submit or reset
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         onclick: move |_| scroll_to(SectionId::Contact),
///         "Get In Touch"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Link styled as a button, opened in a new window
#[component]
pub fn LinkButton(variant: ButtonVariant, href: String, children: Element) -> Element {
    rsx! {
        a {
            class: variant.class(),
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            {children}
        }
    }
}

/// Modal close button with an `×` glyph
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "modal__close",
            "aria-label": "Close modal",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}
