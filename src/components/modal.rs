//! Project detail modal.

use dioxus::prelude::*;
use portfolio_core::{Document, Node, UiEvent};
use portfolio_ui::CloseButton;

use crate::context::{dispatch, use_portfolio};

#[component]
pub fn ProjectModal() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let hidden = doc
        .attribute(Node::Modal, "aria-hidden")
        .unwrap_or_else(|| "true".to_string());
    let open = hidden == "false";
    let title = doc.text(Node::ModalTitle).unwrap_or_default().to_string();
    let body = doc.markup(Node::ModalBody).unwrap_or_default().to_string();

    rsx! {
        div {
            class: if open { "modal modal--open" } else { "modal" },
            id: "project-modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": "{hidden}",
            "aria-labelledby": "modal-title",
            div {
                class: "modal__overlay",
                onclick: move |_| dispatch(app, UiEvent::ModalOverlayClicked),
            }
            div { class: "modal__content",
                CloseButton { onclick: move |_| dispatch(app, UiEvent::ModalCloseClicked) }
                h2 { class: "modal__title", id: "modal-title", "{title}" }
                div { class: "modal__body", id: "modal-body", dangerous_inner_html: "{body}" }
            }
        }
    }
}
