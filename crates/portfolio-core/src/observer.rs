//! Viewport intersection tracking computed from port geometry.

use std::collections::HashSet;

use crate::ports::{Document, Node};

/// A change in a target's intersection state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub node: Node,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Watches a set of nodes and reports when they cross `threshold`.
///
/// A target is intersecting when some part of it is visible and its visible
/// fraction is at least `threshold`. Entries are produced only on state
/// changes, so a target that stays visible is reported once.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    threshold: f64,
    targets: Vec<Node>,
    intersecting: HashSet<Node>,
}

impl IntersectionObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            targets: Vec::new(),
            intersecting: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, node: Node) {
        if !self.targets.contains(&node) {
            self.targets.push(node);
        }
    }

    pub fn unobserve(&mut self, node: Node) {
        self.targets.retain(|n| *n != node);
        self.intersecting.remove(&node);
    }

    pub fn is_observing(&self, node: Node) -> bool {
        self.targets.contains(&node)
    }

    pub fn targets(&self) -> &[Node] {
        &self.targets
    }

    /// Recompute every target against the current viewport.
    pub fn check(&mut self, doc: &dyn Document) -> Vec<IntersectionEntry> {
        let viewport = doc.viewport();
        let mut entries = Vec::new();

        self.targets.retain(|n| doc.contains(*n));
        self.intersecting.retain(|n| doc.contains(*n));

        for &node in &self.targets {
            let ratio = doc
                .bounds(node)
                .map(|b| b.visible_ratio(&viewport))
                .unwrap_or(0.0);
            let is_intersecting = ratio > 0.0 && ratio >= self.threshold;
            let was_intersecting = self.intersecting.contains(&node);

            if is_intersecting != was_intersecting {
                if is_intersecting {
                    self.intersecting.insert(node);
                } else {
                    self.intersecting.remove(&node);
                }
                entries.push(IntersectionEntry {
                    node,
                    ratio,
                    is_intersecting,
                });
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Bounds, MemoryDocument, Viewport};
    use crate::types::SectionId;

    fn doc_with_skills_at(top: f64) -> MemoryDocument {
        let mut doc = MemoryDocument::standard();
        doc.set_viewport(Viewport {
            scroll_y: 0.0,
            width: 1000.0,
            height: 800.0,
        });
        doc.set_bounds(Node::Section(SectionId::Skills), Bounds::new(top, 1000.0));
        doc
    }

    #[test]
    fn reports_transition_into_view_once() {
        let mut doc = doc_with_skills_at(1200.0);
        let mut observer = IntersectionObserver::new(0.3);
        observer.observe(Node::Section(SectionId::Skills));

        assert!(observer.check(&doc).is_empty());

        doc.set_scroll_y(800.0);
        let entries = observer.check(&doc);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);

        doc.set_scroll_y(850.0);
        assert!(observer.check(&doc).is_empty());
    }

    #[test]
    fn below_threshold_is_not_intersecting() {
        let mut doc = doc_with_skills_at(1200.0);
        let mut observer = IntersectionObserver::new(0.3);
        observer.observe(Node::Section(SectionId::Skills));

        // 200 of 1000 px visible
        doc.set_scroll_y(600.0);
        assert!(observer.check(&doc).is_empty());
    }

    #[test]
    fn leaving_view_is_reported() {
        let mut doc = doc_with_skills_at(0.0);
        let mut observer = IntersectionObserver::new(0.1);
        observer.observe(Node::Section(SectionId::Skills));
        assert_eq!(observer.check(&doc).len(), 1);

        doc.set_scroll_y(5000.0);
        let entries = observer.check(&doc);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
    }

    #[test]
    fn removed_targets_are_dropped() {
        let mut doc = MemoryDocument::standard();
        let mut observer = IntersectionObserver::new(0.1);
        observer.observe(Node::Modal);
        doc.remove(Node::Modal);
        observer.check(&doc);
        assert!(!observer.is_observing(Node::Modal));
    }
}
