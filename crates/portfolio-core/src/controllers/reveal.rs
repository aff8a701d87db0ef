//! One-shot scroll reveals and section parallax.

use std::time::Duration;

use super::{animate_element, px, Context, Module, ANIMATE_IN};
use crate::app::Task;
use crate::config::RevealMode;
use crate::error::PortfolioResult;
use crate::observer::IntersectionObserver;
use crate::ports::{Node, Selector};
use crate::timing::Throttle;

const REVEAL_THRESHOLD: f64 = 0.1;
const CHILD_STAGGER: Duration = Duration::from_millis(100);
const PARALLAX_THROTTLE: Duration = Duration::from_millis(10);
const PARALLAX_RATE: f64 = -0.5;

/// Classes of the elements revealed on first sight
pub const REVEAL_TARGETS: [&str; 4] = ["section", "timeline-item", "project-card", "skill-item"];

/// Reveal mode is read from the config on every pass, so a runtime patch
/// takes effect on the next scroll.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    parallax: Throttle,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self {
            observer: IntersectionObserver::new(REVEAL_THRESHOLD),
            parallax: Throttle::new(PARALLAX_THROTTLE),
        }
    }

    pub fn on_viewport_change(&mut self, cx: &mut Context<'_>) {
        for entry in self.observer.check(&*cx.doc) {
            if !entry.is_intersecting {
                continue;
            }
            if cx.config.reveal == RevealMode::Staggered {
                let children = cx.doc.query(entry.node, Selector::Class("animate-child"));
                for (index, child) in children.into_iter().enumerate() {
                    cx.timers
                        .schedule_after(CHILD_STAGGER * index as u32, Task::RevealChild(child));
                }
            }
            animate_element(cx, entry.node, ANIMATE_IN);
        }
    }

    pub fn reveal_child(&mut self, cx: &mut Context<'_>, child: Node) {
        cx.doc.add_class(child, ANIMATE_IN);
    }

    /// Move the floating-shape layers against the scroll direction.
    pub fn on_scroll(&mut self, cx: &mut Context<'_>) {
        if cx.config.reveal != RevealMode::Staggered || !self.parallax.try_fire(cx.now()) {
            return;
        }
        let offset = px(cx.doc.viewport().scroll_y * PARALLAX_RATE);
        for layer in cx.doc.query(Node::Root, Selector::Class("floating-shapes")) {
            cx.doc
                .set_style(layer, "transform", &format!("translate3d(0, {offset}, 0)"));
        }
    }
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-animations"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        for class in REVEAL_TARGETS {
            for node in cx.doc.query(Node::Root, Selector::Class(class)) {
                self.observer.observe(node);
            }
        }
        self.on_viewport_change(cx);
        Ok(())
    }
}
