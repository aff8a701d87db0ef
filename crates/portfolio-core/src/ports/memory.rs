//! In-memory document model.
//!
//! Backs the test suite and the desktop shell, which renders straight from
//! the state kept here.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{Bounds, CanvasFrame, Document, Fragment, Node, Selector, Viewport};
use crate::types::{ExperienceFilter, FieldName, ReadyState, SectionId, SkillCategory};

/// Hero heading that carries the glitch effect
pub const HERO_NAME: &str = "Poovarasu";

/// Number of decorative floating shapes in the hero background
pub const FLOATING_SHAPE_COUNT: usize = 3;

/// Staggered children registered per section
pub const ANIMATE_CHILDREN_PER_SECTION: usize = 2;

/// Observable state of one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeState {
    pub parent: Option<Node>,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub text: Option<String>,
    /// Inner markup written by `replace_children` / `append_fragment`
    pub markup: String,
    /// Own outer markup when the node was appended as a fragment root
    outer: Option<String>,
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub focusable: bool,
    pub bounds: Option<Bounds>,
}

impl NodeState {
    fn child_of(parent: Node) -> Self {
        Self {
            parent: Some(parent),
            ..Default::default()
        }
    }

    /// Space-separated class list, ready for a `class` attribute
    pub fn class_list(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }

    /// Inline `style` attribute value
    pub fn inline_style(&self) -> String {
        self.styles
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A [`Document`] held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: HashMap<Node, NodeState>,
    /// Document order
    order: Vec<Node>,
    ready: ReadyState,
    viewport: Viewport,
    focused: Option<Node>,
    focus_requests: Vec<Node>,
    alerts: Vec<String>,
    scroll_requests: Vec<f64>,
    frames: HashMap<Node, CanvasFrame>,
    revision: u64,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl MemoryDocument {
    /// A document containing only the root and body.
    pub fn empty() -> Self {
        let mut doc = Self {
            nodes: HashMap::new(),
            order: Vec::new(),
            ready: ReadyState::Ready,
            viewport: Viewport::default(),
            focused: None,
            focus_requests: Vec::new(),
            alerts: Vec::new(),
            scroll_requests: Vec::new(),
            frames: HashMap::new(),
            revision: 0,
        };
        doc.nodes.insert(Node::Root, NodeState::default());
        doc.order.push(Node::Root);
        doc.insert(Node::Body, Node::Root);
        doc
    }

    /// The full portfolio page skeleton.
    pub fn standard() -> Self {
        let mut doc = Self::empty();

        doc.insert(Node::Nav, Node::Body);
        doc.insert(Node::NavToggle, Node::Nav);
        doc.set_attribute(Node::NavToggle, "aria-expanded", "false");
        doc.insert(Node::NavMenu, Node::Nav);
        for section in SectionId::ALL {
            let link = Node::NavLink(section);
            doc.insert(link, Node::NavMenu);
            doc.add_class(link, "nav__link");
            doc.set_attribute(link, "href", &format!("#{}", section.as_str()));
        }
        doc.insert(Node::ThemeToggle, Node::Nav);

        doc.insert(Node::MatrixRain, Node::Body);
        doc.insert(Node::FloatingShapes, Node::Body);
        doc.add_class(Node::FloatingShapes, "floating-shapes");
        for i in 0..FLOATING_SHAPE_COUNT {
            doc.insert(Node::FloatingShape(i), Node::FloatingShapes);
            doc.add_class(Node::FloatingShape(i), "floating-shape");
        }

        for section in SectionId::ALL {
            let node = Node::Section(section);
            doc.insert(node, Node::Body);
            doc.add_class(node, "section");
            doc.set_attribute(node, "id", section.as_str());
            for i in 0..ANIMATE_CHILDREN_PER_SECTION {
                let child = Node::AnimateChild(section, i);
                doc.insert(child, node);
                doc.add_class(child, "animate-child");
            }
        }

        doc.insert(Node::GlitchText(0), Node::Section(SectionId::Home));
        doc.set_attribute(Node::GlitchText(0), "data-text", HERO_NAME);
        doc.set_text(Node::GlitchText(0), HERO_NAME);

        for category in SkillCategory::ALL {
            doc.insert(Node::SkillsContainer(category), Node::Section(SectionId::Skills));
        }

        doc.insert(Node::ProjectsGrid, Node::Section(SectionId::Projects));

        for filter in ExperienceFilter::ALL {
            let button = Node::FilterButton(filter);
            doc.insert(button, Node::Section(SectionId::Experience));
            doc.add_class(button, "filter-btn");
            doc.set_attribute(button, "data-filter", filter.as_str());
            if filter == ExperienceFilter::All {
                doc.add_class(button, "filter-btn--active");
            }
        }
        doc.insert(Node::ExperienceTimeline, Node::Section(SectionId::Experience));

        doc.insert(Node::ContactForm, Node::Section(SectionId::Contact));
        for field in FieldName::ALL {
            let node = Node::Field(field);
            doc.insert(node, Node::ContactForm);
            doc.set_attribute(node, "name", field.as_str());
            doc.set_attribute(node, "id", field.as_str());
            if field.required() {
                doc.set_attribute(node, "required", "");
            }
            doc.insert(Node::FieldError(field), Node::ContactForm);
            doc.set_attribute(Node::FieldError(field), "id", &field.error_id());
        }
        doc.insert(Node::SubmitButton, Node::ContactForm);
        doc.add_class(Node::SubmitButton, "contact__submit");
        doc.insert(Node::SubmitText, Node::SubmitButton);
        doc.insert(Node::SubmitLoading, Node::SubmitButton);
        doc.set_style(Node::SubmitLoading, "display", "none");
        doc.insert(Node::ContactSuccess, Node::Section(SectionId::Contact));
        doc.set_style(Node::ContactSuccess, "display", "none");

        doc.insert(Node::Modal, Node::Body);
        doc.set_attribute(Node::Modal, "aria-hidden", "true");
        doc.insert(Node::ModalOverlay, Node::Modal);
        doc.insert(Node::ModalClose, Node::Modal);
        doc.set_focusable(Node::ModalClose);
        doc.insert(Node::ModalTitle, Node::Modal);
        doc.insert(Node::ModalBody, Node::Modal);

        doc.revision = 0;
        doc
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Host-side mutation (what a browser would do on its own)
    // ═══════════════════════════════════════════════════════════════════════

    /// Add `node` under `parent`. Ignored if the parent is missing.
    pub fn insert(&mut self, node: Node, parent: Node) {
        if !self.nodes.contains_key(&parent) {
            return;
        }
        let at = self.insertion_index(parent);
        self.nodes.insert(node, NodeState::child_of(parent));
        self.order.retain(|n| *n != node);
        self.order.insert(at.min(self.order.len()), node);
        self.touch();
    }

    /// Drop `node` and all of its descendants.
    pub fn remove(&mut self, node: Node) {
        self.remove_node(node);
    }

    pub fn set_focusable(&mut self, node: Node) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.focusable = true;
        }
    }

    pub fn set_bounds(&mut self, node: Node, bounds: Bounds) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.bounds = Some(bounds);
            self.touch();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.touch();
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
        self.touch();
    }

    pub fn set_ready_state(&mut self, ready: ReadyState) {
        self.ready = ready;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════════

    pub fn node(&self, node: Node) -> Option<&NodeState> {
        self.nodes.get(&node)
    }

    pub fn style(&self, node: Node, property: &str) -> Option<&str> {
        self.nodes.get(&node)?.styles.get(property).map(String::as_str)
    }

    pub fn text(&self, node: Node) -> Option<&str> {
        self.nodes.get(&node)?.text.as_deref()
    }

    pub fn markup(&self, node: Node) -> Option<&str> {
        self.nodes.get(&node).map(|s| s.markup.as_str())
    }

    pub fn is_checked(&self, node: Node) -> bool {
        self.nodes.get(&node).is_some_and(|s| s.checked)
    }

    pub fn is_disabled(&self, node: Node) -> bool {
        self.nodes.get(&node).is_some_and(|s| s.disabled)
    }

    pub fn focused(&self) -> Option<Node> {
        self.focused
    }

    /// Every node focus was moved to, oldest first
    pub fn focus_requests(&self) -> &[Node] {
        &self.focus_requests
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    pub fn frame(&self, canvas: Node) -> Option<&CanvasFrame> {
        self.frames.get(&canvas)
    }

    /// Direct children of `node`, in document order
    pub fn children(&self, node: Node) -> Vec<Node> {
        self.order
            .iter()
            .copied()
            .filter(|n| self.nodes.get(n).and_then(|s| s.parent) == Some(node))
            .collect()
    }

    /// Incremented on every mutation; lets a renderer skip unchanged frames.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Position just after the last existing descendant of `parent`.
    fn insertion_index(&self, parent: Node) -> usize {
        let mut index = match self.order.iter().position(|n| *n == parent) {
            Some(i) => i + 1,
            None => return self.order.len(),
        };
        while index < self.order.len() && self.is_within(self.order[index], parent) {
            index += 1;
        }
        index
    }

    fn descendants(&self, node: Node) -> Vec<Node> {
        self.order
            .iter()
            .copied()
            .filter(|n| *n != node && self.is_within(*n, node))
            .collect()
    }

    fn drop_descendants(&mut self, node: Node) {
        for child in self.descendants(node) {
            self.nodes.remove(&child);
            self.frames.remove(&child);
            if self.focused == Some(child) {
                self.focused = None;
            }
        }
        let nodes = &self.nodes;
        self.order.retain(|n| nodes.contains_key(n));
    }

    fn register(&mut self, container: Node, fragment: &Fragment) {
        let single_root = fragment.nodes.iter().filter(|n| n.parent.is_none()).count() == 1;
        for declared in &fragment.nodes {
            let parent = declared.parent.unwrap_or(container);
            if !self.nodes.contains_key(&parent) {
                continue;
            }
            let at = self.insertion_index(parent);
            let mut state = NodeState::child_of(parent);
            state.classes = declared.classes.iter().map(|c| c.to_string()).collect();
            if declared.parent.is_none() && single_root {
                state.outer = Some(fragment.markup.clone());
            }
            self.nodes.insert(declared.node, state);
            self.order.retain(|n| *n != declared.node);
            self.order.insert(at.min(self.order.len()), declared.node);
        }
    }
}

impl Document for MemoryDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready
    }

    fn contains(&self, node: Node) -> bool {
        self.nodes.contains_key(&node)
    }

    fn is_within(&self, node: Node, ancestor: Node) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes.get(&n).and_then(|s| s.parent);
        }
        false
    }

    fn query(&self, within: Node, selector: Selector<'_>) -> Vec<Node> {
        self.descendants(within)
            .into_iter()
            .filter(|n| {
                let Some(state) = self.nodes.get(n) else {
                    return false;
                };
                match selector {
                    Selector::Class(class) => state.classes.contains(class),
                    Selector::Attribute(name) => state.attributes.contains_key(name),
                }
            })
            .collect()
    }

    fn attribute(&self, node: Node, name: &str) -> Option<String> {
        self.nodes.get(&node)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: Node, name: &str, value: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.attributes.insert(name.to_string(), value.to_string());
            self.touch();
        }
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.nodes.get(&node).is_some_and(|s| s.classes.contains(class))
    }

    fn set_class(&mut self, node: Node, class: &str, on: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            if on {
                state.classes.insert(class.to_string());
            } else {
                state.classes.remove(class);
            }
            self.touch();
        }
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            if value.is_empty() {
                state.styles.remove(property);
            } else {
                state.styles.insert(property.to_string(), value.to_string());
            }
            self.touch();
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.text = Some(text.to_string());
            self.touch();
        }
    }

    fn replace_children(&mut self, node: Node, fragment: Fragment) {
        if !self.nodes.contains_key(&node) {
            return;
        }
        self.drop_descendants(node);
        self.register(node, &fragment);
        if let Some(state) = self.nodes.get_mut(&node) {
            state.markup = fragment.markup;
        }
        self.touch();
    }

    fn append_fragment(&mut self, node: Node, fragment: Fragment) {
        if !self.nodes.contains_key(&node) {
            return;
        }
        self.register(node, &fragment);
        if let Some(state) = self.nodes.get_mut(&node) {
            state.markup.push_str(&fragment.markup);
        }
        self.touch();
    }

    fn remove_node(&mut self, node: Node) {
        if node == Node::Root {
            return;
        }
        let Some(state) = self.nodes.get(&node).cloned() else {
            return;
        };
        self.drop_descendants(node);
        self.nodes.remove(&node);
        self.frames.remove(&node);
        self.order.retain(|n| *n != node);
        if self.focused == Some(node) {
            self.focused = None;
        }
        if let (Some(parent), Some(outer)) = (state.parent, state.outer) {
            if let Some(parent_state) = self.nodes.get_mut(&parent) {
                if let Some(at) = parent_state.markup.find(&outer) {
                    parent_state.markup.replace_range(at..at + outer.len(), "");
                }
            }
        }
        self.touch();
    }

    fn value(&self, node: Node) -> Option<String> {
        self.nodes.get(&node).map(|s| s.value.clone())
    }

    fn set_value(&mut self, node: Node, value: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.value = value.to_string();
            self.touch();
        }
    }

    fn set_checked(&mut self, node: Node, checked: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.checked = checked;
            self.touch();
        }
    }

    fn set_disabled(&mut self, node: Node, disabled: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.disabled = disabled;
            self.touch();
        }
    }

    fn focus_first_within(&mut self, container: Node) -> Option<Node> {
        let target = self.descendants(container).into_iter().find(|n| {
            self.nodes
                .get(n)
                .is_some_and(|s| s.focusable && !s.disabled)
        })?;
        self.focused = Some(target);
        self.focus_requests.push(target);
        self.touch();
        Some(target)
    }

    fn bounds(&self, node: Node) -> Option<Bounds> {
        let mut current = Some(node);
        while let Some(n) = current {
            let state = self.nodes.get(&n)?;
            if let Some(bounds) = state.bounds {
                return Some(bounds);
            }
            current = state.parent;
        }
        None
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
        self.viewport.scroll_y = top;
        self.touch();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.touch();
    }

    fn paint(&mut self, canvas: Node, frame: CanvasFrame) {
        if self.nodes.contains_key(&canvas) {
            self.frames.insert(canvas, frame);
            self.touch();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_document_has_every_container() {
        let doc = MemoryDocument::standard();
        assert!(doc.contains(Node::ContactForm));
        assert!(doc.contains(Node::Modal));
        assert!(doc.contains(Node::ProjectsGrid));
        assert!(doc.contains(Node::ExperienceTimeline));
        for category in SkillCategory::ALL {
            assert!(doc.contains(Node::SkillsContainer(category)));
        }
        assert!(!doc.contains(Node::ParticleCanvas));
    }

    #[test]
    fn mutations_on_missing_nodes_are_ignored() {
        let mut doc = MemoryDocument::empty();
        doc.set_attribute(Node::Modal, "aria-hidden", "false");
        doc.add_class(Node::NavMenu, "nav__menu--open");
        doc.replace_children(Node::ProjectsGrid, Fragment::new());
        assert!(!doc.contains(Node::Modal));
        assert_eq!(doc.attribute(Node::Modal, "aria-hidden"), None);
    }

    #[test]
    fn replace_children_swaps_declared_nodes() {
        let mut doc = MemoryDocument::standard();
        let mut first = Fragment::new();
        first.push_markup("<div class=\"timeline-item\"></div>");
        first.declare(Node::TimelineItem("project-lead"), &["timeline-item"]);
        doc.replace_children(Node::ExperienceTimeline, first);
        assert!(doc.contains(Node::TimelineItem("project-lead")));

        let mut second = Fragment::new();
        second.declare(Node::TimelineItem("intern-webdev"), &["timeline-item"]);
        doc.replace_children(Node::ExperienceTimeline, second);
        assert!(!doc.contains(Node::TimelineItem("project-lead")));
        assert!(doc.contains(Node::TimelineItem("intern-webdev")));
        assert_eq!(doc.markup(Node::ExperienceTimeline), Some(""));
    }

    #[test]
    fn removing_appended_node_removes_its_markup() {
        let mut doc = MemoryDocument::standard();
        for id in [1, 2] {
            let mut column = Fragment::new();
            column.push_markup(&format!("<div class=\"matrix-column\">{id}</div>"));
            column.declare(Node::MatrixColumn(id), &["matrix-column"]);
            doc.append_fragment(Node::MatrixRain, column);
        }

        doc.remove_node(Node::MatrixColumn(1));
        assert_eq!(
            doc.markup(Node::MatrixRain),
            Some("<div class=\"matrix-column\">2</div>")
        );
        assert_eq!(doc.children(Node::MatrixRain), vec![Node::MatrixColumn(2)]);
    }

    #[test]
    fn query_by_class_is_scoped_and_ordered() {
        let doc = MemoryDocument::standard();
        let children = doc.query(Node::Section(SectionId::About), Selector::Class("animate-child"));
        assert_eq!(
            children,
            vec![
                Node::AnimateChild(SectionId::About, 0),
                Node::AnimateChild(SectionId::About, 1)
            ]
        );
        let glitch = doc.query(Node::Root, Selector::Attribute("data-text"));
        assert_eq!(glitch, vec![Node::GlitchText(0)]);
    }

    #[test]
    fn bounds_fall_back_to_nearest_ancestor() {
        let mut doc = MemoryDocument::standard();
        doc.set_bounds(Node::Section(SectionId::Contact), Bounds::new(4000.0, 700.0));
        assert_eq!(doc.bounds(Node::Field(FieldName::Email)), Some(Bounds::new(4000.0, 700.0)));
        assert_eq!(doc.bounds(Node::Section(SectionId::Home)), None);
    }

    #[test]
    fn focus_finds_first_focusable_descendant() {
        let mut doc = MemoryDocument::standard();
        assert_eq!(doc.focus_first_within(Node::Modal), Some(Node::ModalClose));
        assert_eq!(doc.focused(), Some(Node::ModalClose));
        assert_eq!(doc.focus_first_within(Node::Nav), None);

        doc.focus_first_within(Node::Modal);
        assert_eq!(doc.focus_requests(), &[Node::ModalClose, Node::ModalClose]);
    }

    #[test]
    fn empty_style_value_removes_property() {
        let mut doc = MemoryDocument::standard();
        doc.set_style(Node::Body, "overflow", "hidden");
        assert_eq!(doc.style(Node::Body, "overflow"), Some("hidden"));
        doc.set_style(Node::Body, "overflow", "");
        assert_eq!(doc.style(Node::Body, "overflow"), None);
    }
}
