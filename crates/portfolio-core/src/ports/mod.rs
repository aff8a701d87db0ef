//! Content ports: the typed capability surface the controllers drive.
//!
//! Every element a controller touches is addressed by a [`Node`] rather than
//! a string selector. Implementations of [`Document`] must treat every
//! operation on a node they do not contain as a silent no-op; controllers
//! only check [`Document::contains`] where they need to skip a whole step.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐  set_attribute / set_class / replace_children  ┌───────────────┐
//! │ controllers  │ ──────────────────────────────────────────────▶│  Document     │
//! │ (theme, nav, │                                                │  (ports)      │
//! │  form, ...)  │ ◀──────────────────────────────────────────────│               │
//! └──────────────┘        contains / value / bounds / viewport    └───────────────┘
//!                                                                      │
//!                                                      MemoryDocument ─┘ (tests, desktop shell)
//! ```

mod memory;

pub use memory::{
    MemoryDocument, NodeState, ANIMATE_CHILDREN_PER_SECTION, FLOATING_SHAPE_COUNT, HERO_NAME,
};

use crate::content::find_project;
use crate::content::EXPERIENCE;
use crate::effects::GlitchChannel;
use crate::types::{ExperienceFilter, FieldName, ReadyState, SectionId, SkillCategory};

/// Typed address of an element in the hosting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// `<html>`, carries `data-theme`
    Root,
    Body,
    Nav,
    NavToggle,
    NavMenu,
    NavLink(SectionId),
    ThemeToggle,
    Section(SectionId),
    /// Staggered child of a section, revealed after the section itself
    AnimateChild(SectionId, usize),
    ContactForm,
    ContactSuccess,
    SubmitButton,
    SubmitText,
    SubmitLoading,
    Field(FieldName),
    FieldError(FieldName),
    Modal,
    ModalOverlay,
    ModalClose,
    ModalTitle,
    ModalBody,
    ProjectsGrid,
    ProjectCard(&'static str),
    ExperienceTimeline,
    TimelineItem(&'static str),
    FilterButton(ExperienceFilter),
    SkillsContainer(SkillCategory),
    SkillItem(SkillCategory, usize),
    SkillBar(SkillCategory, usize),
    MatrixRain,
    MatrixColumn(u64),
    FloatingShapes,
    FloatingShape(usize),
    /// Element with a `data-text` attribute that receives glitch layers
    GlitchText(usize),
    GlitchLayer(usize, GlitchChannel),
    ParticleCanvas,
}

impl Node {
    /// Key written to `data-node` on elements whose geometry the host reports.
    pub fn layout_key(&self) -> Option<String> {
        match self {
            Node::Section(s) => Some(format!("section:{}", s.as_str())),
            Node::SkillItem(c, i) => Some(format!("skill-item:{}:{}", c.as_str(), i)),
            Node::SkillBar(c, i) => Some(format!("skill-bar:{}:{}", c.as_str(), i)),
            Node::ProjectCard(id) => Some(format!("project:{id}")),
            Node::TimelineItem(id) => Some(format!("timeline:{id}")),
            _ => None,
        }
    }

    /// Inverse of [`Node::layout_key`]. Unknown keys resolve to `None`.
    pub fn from_layout_key(key: &str) -> Option<Node> {
        let (kind, rest) = key.split_once(':')?;
        match kind {
            "section" => SectionId::from_anchor(rest).map(Node::Section),
            "skill-item" | "skill-bar" => {
                let (category, index) = rest.split_once(':')?;
                let category = SkillCategory::ALL
                    .into_iter()
                    .find(|c| c.as_str() == category)?;
                let index = index.parse().ok()?;
                Some(if kind == "skill-item" {
                    Node::SkillItem(category, index)
                } else {
                    Node::SkillBar(category, index)
                })
            }
            "project" => find_project(rest).map(|p| Node::ProjectCard(p.id)),
            "timeline" => EXPERIENCE
                .iter()
                .find(|e| e.id == rest)
                .map(|e| Node::TimelineItem(e.id)),
            _ => None,
        }
    }
}

/// Element query used where the original page used selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Class(&'a str),
    Attribute(&'a str),
}

/// Vertical layout box in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Fraction of this box inside the viewport, in `0.0..=1.0`.
    pub fn visible_ratio(&self, viewport: &Viewport) -> f64 {
        let top = self.top.max(viewport.scroll_y);
        let bottom = self.bottom().min(viewport.bottom());
        if self.height <= 0.0 {
            return if self.top >= viewport.scroll_y && self.top <= viewport.bottom() {
                1.0
            } else {
                0.0
            };
        }
        ((bottom - top).max(0.0) / self.height).min(1.0)
    }

    /// Whether the whole box is inside the viewport.
    pub fn is_fully_visible(&self, viewport: &Viewport) -> bool {
        self.top >= viewport.scroll_y && self.bottom() <= viewport.bottom()
    }
}

/// Scroll position and window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// An addressable element created by a fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentNode {
    pub node: Node,
    /// `None` means the node hangs directly off the fragment's container
    pub parent: Option<Node>,
    pub classes: Vec<&'static str>,
}

/// Rendered markup plus the addressable nodes it creates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub markup: String,
    pub nodes: Vec<FragmentNode>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_markup(&mut self, markup: &str) {
        self.markup.push_str(markup);
    }

    /// Declare a node directly under the container.
    pub fn declare(&mut self, node: Node, classes: &[&'static str]) {
        self.nodes.push(FragmentNode {
            node,
            parent: None,
            classes: classes.to_vec(),
        });
    }

    /// Declare a node nested under another declared node.
    pub fn declare_nested(&mut self, node: Node, parent: Node, classes: &[&'static str]) {
        self.nodes.push(FragmentNode {
            node,
            parent: Some(parent),
            classes: classes.to_vec(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.nodes.is_empty()
    }
}

/// One particle as drawn on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub color: String,
}

/// A full redraw of a canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasFrame {
    pub width: f64,
    pub height: f64,
    pub dots: Vec<Dot>,
}

/// The hosting document as seen by the controllers.
pub trait Document {
    fn ready_state(&self) -> ReadyState;

    fn contains(&self, node: Node) -> bool;

    /// `true` when `node` is `ancestor` or one of its descendants.
    fn is_within(&self, node: Node, ancestor: Node) -> bool;

    /// Matching nodes under `within`, in document order.
    fn query(&self, within: Node, selector: Selector<'_>) -> Vec<Node>;

    fn attribute(&self, node: Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: Node, name: &str, value: &str);

    fn has_class(&self, node: Node, class: &str) -> bool;
    fn set_class(&mut self, node: Node, class: &str, on: bool);

    fn add_class(&mut self, node: Node, class: &str) {
        self.set_class(node, class, true);
    }

    fn remove_class(&mut self, node: Node, class: &str) {
        self.set_class(node, class, false);
    }

    /// Set an inline style property. An empty value removes it.
    fn set_style(&mut self, node: Node, property: &str, value: &str);

    fn set_text(&mut self, node: Node, text: &str);

    /// Replace everything inside `node` with `fragment`.
    fn replace_children(&mut self, node: Node, fragment: Fragment);

    /// Append `fragment` after the existing children of `node`.
    fn append_fragment(&mut self, node: Node, fragment: Fragment);

    fn remove_node(&mut self, node: Node);

    /// Current value of a form control, `None` if absent.
    fn value(&self, node: Node) -> Option<String>;
    fn set_value(&mut self, node: Node, value: &str);

    fn set_checked(&mut self, node: Node, checked: bool);
    fn set_disabled(&mut self, node: Node, disabled: bool);

    /// Focus the first focusable element inside `container`.
    fn focus_first_within(&mut self, container: Node) -> Option<Node>;

    /// Layout box of `node`, or of its nearest laid-out ancestor.
    fn bounds(&self, node: Node) -> Option<Bounds>;
    fn viewport(&self) -> Viewport;

    /// Smooth-scroll the window to `top`.
    fn scroll_to(&mut self, top: f64);

    /// Blocking user-facing dialog.
    fn alert(&mut self, message: &str);

    fn paint(&mut self, canvas: Node, frame: CanvasFrame);
}
