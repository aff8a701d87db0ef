use std::time::Duration;

use tracing::debug;

use super::{Context, Module};
use crate::error::PortfolioResult;
use crate::ports::Node;
use crate::timing::Throttle;
use crate::types::SectionId;

/// Extra look-ahead past the nav when picking the active link
const ACTIVE_LINK_LOOKAHEAD: f64 = 50.0;

/// Scroll distance after which the nav gets its compact style
const SCROLLED_THRESHOLD: f64 = 100.0;

const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Mobile menu, section scrolling and active-link tracking.
pub struct NavigationManager {
    scroll: Throttle,
}

impl Default for NavigationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationManager {
    pub fn new() -> Self {
        Self {
            scroll: Throttle::new(SCROLL_THROTTLE),
        }
    }

    pub fn toggle_menu(&mut self, cx: &mut Context<'_>) {
        cx.state.nav_open = !cx.state.nav_open;
        let open = cx.state.nav_open;
        debug!(open, "Toggled mobile menu");

        if cx.doc.contains(Node::NavToggle) && cx.doc.contains(Node::NavMenu) {
            cx.doc
                .set_attribute(Node::NavToggle, "aria-expanded", if open { "true" } else { "false" });
            cx.doc.set_class(Node::NavMenu, "nav__menu--open", open);
            cx.doc
                .set_style(Node::Body, "overflow", if open { "hidden" } else { "" });
        }
    }

    pub fn close_menu(&mut self, cx: &mut Context<'_>) {
        if cx.state.nav_open {
            self.toggle_menu(cx);
        }
    }

    /// Scroll so the section's top sits just below the fixed nav.
    pub fn scroll_to_section(&mut self, cx: &mut Context<'_>, section: SectionId) {
        let node = Node::Section(section);
        if !cx.doc.contains(node) {
            return;
        }
        let Some(bounds) = cx.doc.bounds(node) else {
            return;
        };
        let top = (bounds.top - cx.config.scroll_offset).max(0.0);
        debug!(%section, top, "Scrolling to section");
        cx.doc.scroll_to(top);
    }

    pub fn on_link_clicked(&mut self, cx: &mut Context<'_>, section: SectionId) {
        self.scroll_to_section(cx, section);
        self.close_menu(cx);
    }

    /// A click anywhere outside the menu and its toggle closes the menu.
    pub fn on_document_clicked(&mut self, cx: &mut Context<'_>, target: Node) {
        if cx.state.nav_open
            && !cx.doc.is_within(target, Node::NavMenu)
            && !cx.doc.is_within(target, Node::NavToggle)
        {
            self.close_menu(cx);
        }
    }

    pub fn on_escape(&mut self, cx: &mut Context<'_>) {
        self.close_menu(cx);
    }

    pub fn on_scroll(&mut self, cx: &mut Context<'_>) {
        if !self.scroll.try_fire(cx.now()) {
            return;
        }
        self.update_active_link(cx);

        let scrolled = cx.doc.viewport().scroll_y > SCROLLED_THRESHOLD;
        cx.state.nav_scrolled = scrolled;
        cx.doc.set_class(Node::Nav, "nav--scrolled", scrolled);
    }

    fn update_active_link(&mut self, cx: &mut Context<'_>) {
        let position = cx.doc.viewport().scroll_y + cx.config.scroll_offset + ACTIVE_LINK_LOOKAHEAD;

        for section in SectionId::ALL {
            let node = Node::Section(section);
            if !cx.doc.contains(node) {
                continue;
            }
            let Some(bounds) = cx.doc.bounds(node) else {
                continue;
            };
            if position >= bounds.top && position < bounds.bottom() {
                for other in SectionId::ALL {
                    cx.doc.remove_class(Node::NavLink(other), "active");
                }
                cx.doc.add_class(Node::NavLink(section), "active");
            }
        }
    }
}

impl Module for NavigationManager {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.on_scroll(cx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::Harness;
    use crate::ports::{Bounds, Document};

    fn stacked_sections(h: &mut Harness) {
        for (i, section) in SectionId::ALL.into_iter().enumerate() {
            h.doc
                .set_bounds(Node::Section(section), Bounds::new(i as f64 * 1000.0, 1000.0));
        }
    }

    #[test]
    fn toggle_opens_and_closes_menu() {
        let mut h = Harness::new();
        let mut nav = NavigationManager::new();

        nav.toggle_menu(&mut h.cx());
        assert!(h.state.nav_open);
        assert_eq!(h.doc.attribute(Node::NavToggle, "aria-expanded").as_deref(), Some("true"));
        assert!(h.doc.has_class(Node::NavMenu, "nav__menu--open"));
        assert_eq!(h.doc.style(Node::Body, "overflow"), Some("hidden"));

        nav.toggle_menu(&mut h.cx());
        assert!(!h.state.nav_open);
        assert_eq!(h.doc.attribute(Node::NavToggle, "aria-expanded").as_deref(), Some("false"));
        assert_eq!(h.doc.style(Node::Body, "overflow"), None);
    }

    #[test]
    fn link_click_scrolls_with_offset_and_closes_menu() {
        let mut h = Harness::new();
        stacked_sections(&mut h);
        let mut nav = NavigationManager::new();
        nav.toggle_menu(&mut h.cx());

        nav.on_link_clicked(&mut h.cx(), SectionId::Projects);
        assert_eq!(h.doc.scroll_requests(), &[2920.0]);
        assert!(!h.state.nav_open);
    }

    #[test]
    fn scroll_target_is_clamped_at_top() {
        let mut h = Harness::new();
        stacked_sections(&mut h);
        let mut nav = NavigationManager::new();
        nav.scroll_to_section(&mut h.cx(), SectionId::Home);
        assert_eq!(h.doc.scroll_requests(), &[0.0]);
    }

    #[test]
    fn outside_click_closes_but_menu_click_does_not() {
        let mut h = Harness::new();
        let mut nav = NavigationManager::new();
        nav.toggle_menu(&mut h.cx());

        nav.on_document_clicked(&mut h.cx(), Node::NavLink(SectionId::About));
        assert!(h.state.nav_open);

        nav.on_document_clicked(&mut h.cx(), Node::Section(SectionId::About));
        assert!(!h.state.nav_open);
    }

    #[test]
    fn active_link_follows_scroll_position() {
        let mut h = Harness::new();
        stacked_sections(&mut h);
        let mut nav = NavigationManager::new();

        // 1870 + 80 + 50 = 2000, the first pixel of projects
        h.doc.set_scroll_y(1870.0);
        nav.on_scroll(&mut h.cx());
        assert!(h.doc.has_class(Node::NavLink(SectionId::Projects), "active"));
        assert!(!h.doc.has_class(Node::NavLink(SectionId::Skills), "active"));
        assert!(h.state.nav_scrolled);
        assert!(h.doc.has_class(Node::Nav, "nav--scrolled"));
    }

    #[test]
    fn scroll_handling_is_throttled() {
        let mut h = Harness::new();
        stacked_sections(&mut h);
        let mut nav = NavigationManager::new();

        nav.on_scroll(&mut h.cx());
        h.doc.set_scroll_y(500.0);
        nav.on_scroll(&mut h.cx());
        assert!(!h.state.nav_scrolled);

        h.due(Duration::from_millis(100));
        nav.on_scroll(&mut h.cx());
        assert!(h.state.nav_scrolled);
    }
}
