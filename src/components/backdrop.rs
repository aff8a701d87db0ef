//! Decorative layers behind the content: rain, shapes and particles.

use dioxus::prelude::*;
use portfolio_core::ports::FLOATING_SHAPE_COUNT;
use portfolio_core::Node;

use crate::context::{class_of, style_of, use_portfolio};

/// Matrix rain container. Columns live in the container's markup.
#[component]
pub fn MatrixLayer() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let style = style_of(doc, Node::MatrixRain);
    let markup = doc.markup(Node::MatrixRain).unwrap_or_default().to_string();

    rsx! {
        div {
            class: "matrix-rain",
            id: "matrix-rain",
            "aria-hidden": "true",
            style: "{style}",
            dangerous_inner_html: "{markup}",
        }
    }
}

#[component]
pub fn FloatingShapes() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let layer_class = class_of(doc, Node::FloatingShapes);
    let layer_style = style_of(doc, Node::FloatingShapes);
    let shapes: Vec<(usize, String, String)> = (0..FLOATING_SHAPE_COUNT)
        .map(|i| {
            let node = Node::FloatingShape(i);
            (i, class_of(doc, node), style_of(doc, node))
        })
        .collect();

    rsx! {
        div { class: "{layer_class}", style: "{layer_style}", "aria-hidden": "true",
            for (i, class, style) in shapes {
                div { key: "{i}", class: "{class} floating-shape--{i}", style: "{style}" }
            }
        }
    }
}

/// Particle field drawn as SVG circles from the last painted frame.
#[component]
pub fn ParticleLayer() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let Some(frame) = doc.frame(Node::ParticleCanvas) else {
        return rsx! {};
    };
    let style = style_of(doc, Node::ParticleCanvas);
    let (width, height) = (frame.width, frame.height);
    let dots = frame.dots.clone();

    rsx! {
        svg {
            class: "particle-canvas",
            style: "{style}",
            view_box: "0 0 {width} {height}",
            for (i, dot) in dots.into_iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: "{dot.x}",
                    cy: "{dot.y}",
                    r: "{dot.radius}",
                    fill: "{dot.color}",
                    opacity: "{dot.alpha}",
                }
            }
        }
    }
}
