//! Webview bridge.
//!
//! The webview owns scroll position, layout and global key/print events.
//! A small script forwards them as JSON; [`apply`] writes the geometry into
//! the document and turns the message into a [`UiEvent`].

use portfolio_core::{Bounds, KeyTarget, MemoryDocument, Node, UiEvent, Viewport};
use serde::Deserialize;

/// Installed once per window. Reports layout of every `[data-node]` element
/// along with the viewport on scroll and resize, and every 500 ms so
/// re-rendered content gets measured.
pub const BRIDGE_JS: &str = r#"
const layout = () => ({
  scroll_y: window.scrollY,
  width: window.innerWidth,
  height: window.innerHeight,
  nodes: Array.from(document.querySelectorAll('[data-node]')).map((el) => {
    const rect = el.getBoundingClientRect();
    return { key: el.dataset.node, top: rect.top + window.scrollY, height: rect.height };
  }),
});
const targetKind = (el) => {
  const tag = el && el.tagName;
  if (tag === 'INPUT') return 'input';
  if (tag === 'TEXTAREA') return 'textarea';
  return 'page';
};
window.addEventListener('scroll', () => dioxus.send({ kind: 'scroll', ...layout() }), { passive: true });
window.addEventListener('resize', () => dioxus.send({ kind: 'resize', ...layout() }));
window.addEventListener('mousemove', (e) => dioxus.send({ kind: 'mouse', x: e.clientX, y: e.clientY }));
document.addEventListener('keydown', (e) => dioxus.send({ kind: 'key', key: e.key, target: targetKind(e.target) }));
window.addEventListener('beforeprint', () => dioxus.send({ kind: 'beforeprint' }));
window.addEventListener('afterprint', () => dioxus.send({ kind: 'afterprint' }));
setInterval(() => dioxus.send({ kind: 'layout', ...layout() }), 500);
dioxus.send({ kind: 'layout', ...layout() });
"#;

/// Scrolls the webview to the position the app asked for.
pub fn scroll_script(top: f64) -> String {
    format!("window.scrollTo({{ top: {top}, behavior: 'smooth' }});")
}

/// Raises a blocking alert with `message`.
pub fn alert_script(message: &str) -> String {
    // A JSON string literal is a valid JS string literal
    let quoted = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("alert({quoted});")
}

/// Moves keyboard focus to the element rendered for `node`, if the shell
/// renders one that can take focus.
pub fn focus_script(node: Node) -> Option<String> {
    let selector = match node {
        Node::ModalClose => "#project-modal .modal__close".to_string(),
        Node::Field(field) => format!("#{}", field.as_str()),
        Node::SubmitButton => "#contact-form .contact__submit".to_string(),
        _ => return None,
    };
    Some(format!("document.querySelector('{selector}')?.focus();"))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeLayout {
    pub key: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BridgeMessage {
    Scroll(Layout),
    Resize(Layout),
    Layout(Layout),
    Mouse { x: f64, y: f64 },
    Key { key: String, target: String },
    BeforePrint,
    AfterPrint,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layout {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub nodes: Vec<NodeLayout>,
}

fn apply_layout(doc: &mut MemoryDocument, layout: &Layout) {
    doc.set_viewport(Viewport {
        scroll_y: layout.scroll_y,
        width: layout.width,
        height: layout.height,
    });
    for entry in &layout.nodes {
        if let Some(node) = Node::from_layout_key(&entry.key) {
            doc.set_bounds(node, Bounds::new(entry.top, entry.height));
        }
    }
}

fn key_target(raw: &str) -> KeyTarget {
    match raw {
        "input" => KeyTarget::Input,
        "textarea" => KeyTarget::TextArea,
        _ => KeyTarget::Page,
    }
}

/// Record geometry carried by `message` and return the event to dispatch.
pub fn apply(doc: &mut MemoryDocument, message: BridgeMessage) -> UiEvent {
    match message {
        BridgeMessage::Scroll(layout) | BridgeMessage::Layout(layout) => {
            apply_layout(doc, &layout);
            UiEvent::Scrolled
        }
        BridgeMessage::Resize(layout) => {
            apply_layout(doc, &layout);
            UiEvent::Resized
        }
        BridgeMessage::Mouse { x, y } => UiEvent::MouseMoved { x, y },
        BridgeMessage::Key { key, target } => UiEvent::KeyDown {
            key,
            target: key_target(&target),
        },
        BridgeMessage::BeforePrint => UiEvent::BeforePrint,
        BridgeMessage::AfterPrint => UiEvent::AfterPrint,
    }
}
