//! The single portfolio page.

use dioxus::prelude::*;
use portfolio_core::{Document, Node, UiEvent};

use crate::components::{
    About, Contact, Experience, FloatingShapes, Hero, MatrixLayer, NavBar, ParticleLayer,
    ProjectModal, Projects, Skills,
};
use crate::context::{class_of, dispatch, style_of, use_portfolio};

/// Page root. Carries the theme and the body-level classes (`loaded`,
/// `printing`) and scroll lock the core sets on the body.
#[component]
pub fn Home() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let theme = doc
        .attribute(Node::Root, "data-theme")
        .unwrap_or_else(|| "light".to_string());
    let body_class = class_of(doc, Node::Body);
    let body_style = style_of(doc, Node::Body);

    rsx! {
        div {
            class: "page {body_class}",
            "data-theme": "{theme}",
            style: "{body_style}",
            onclick: move |_| dispatch(app, UiEvent::DocumentClicked { target: Node::Body }),
            MatrixLayer {}
            FloatingShapes {}
            NavBar {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Experience {}
                Contact {}
            }
            footer { class: "footer",
                p { "\u{00A9} 2024 Poovarasu. All rights reserved." }
            }
            ProjectModal {}
            ParticleLayer {}
        }
    }
}
