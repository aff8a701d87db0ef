use std::time::Duration;

use tracing::debug;

use super::{Context, Module};
use crate::app::Task;
use crate::error::PortfolioResult;
use crate::markup::skill_items;
use crate::observer::IntersectionObserver;
use crate::ports::{Node, Selector};
use crate::types::{SectionId, SkillCategory};

const SECTION_THRESHOLD: f64 = 0.3;
const BAR_DELAY: Duration = Duration::from_millis(100);

/// Renders the skill bars and fills them once they scroll into view.
pub struct SkillsManager {
    observer: IntersectionObserver,
}

impl Default for SkillsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsManager {
    pub fn new() -> Self {
        Self {
            observer: IntersectionObserver::new(SECTION_THRESHOLD),
        }
    }

    pub fn render(&mut self, cx: &mut Context<'_>) {
        for category in SkillCategory::ALL {
            let container = Node::SkillsContainer(category);
            if cx.doc.contains(container) {
                cx.doc.replace_children(container, skill_items(category));
            }
        }
    }

    pub fn on_viewport_change(&mut self, cx: &mut Context<'_>) {
        let entries = self.observer.check(&*cx.doc);
        if entries.iter().any(|e| e.is_intersecting) {
            self.animate_bars(cx);
        }
    }

    /// Schedule the fill of every fully visible bar that has not run yet.
    pub fn animate_bars(&mut self, cx: &mut Context<'_>) {
        let viewport = cx.doc.viewport();
        for bar in cx.doc.query(Node::Root, Selector::Class("skill-progress__bar")) {
            if cx.state.is_animated(bar) {
                continue;
            }
            let visible = cx
                .doc
                .bounds(bar)
                .is_some_and(|b| b.is_fully_visible(&viewport));
            if !visible {
                continue;
            }
            let level = cx
                .doc
                .attribute(bar, "data-level")
                .and_then(|l| l.parse::<u8>().ok())
                .unwrap_or(0);
            cx.timers
                .schedule_after(BAR_DELAY, Task::WidenSkillBar { bar, level });
            cx.state.mark_animated(bar);
        }
    }

    pub fn widen(&mut self, cx: &mut Context<'_>, bar: Node, level: u8) {
        cx.doc.set_style(bar, "width", &format!("{level}%"));
    }
}

impl Module for SkillsManager {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.render(cx);

        let section = Node::Section(SectionId::Skills);
        if cx.doc.contains(section) {
            self.observer.observe(section);
            self.on_viewport_change(cx);
        } else {
            debug!("No skills section to observe");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::skills_for;
    use crate::controllers::test_support::Harness;
    use crate::ports::{Bounds, Document};

    fn init_offscreen() -> (Harness, SkillsManager) {
        let mut h = Harness::new();
        h.doc
            .set_bounds(Node::Section(SectionId::Skills), Bounds::new(2000.0, 600.0));
        let mut skills = SkillsManager::new();
        skills.init(&mut h.cx()).unwrap();
        (h, skills)
    }

    #[test]
    fn renders_every_category() {
        let (h, _) = init_offscreen();
        for category in SkillCategory::ALL {
            let items = h
                .doc
                .query(Node::SkillsContainer(category), Selector::Class("skill-item"));
            assert_eq!(items.len(), skills_for(category).len());
        }
    }

    #[test]
    fn bars_fill_after_section_scrolls_into_view() {
        let (mut h, mut skills) = init_offscreen();
        assert_eq!(h.timers.pending_timers(), 0);

        h.doc.set_scroll_y(1800.0);
        skills.on_viewport_change(&mut h.cx());

        let tasks = h.due(Duration::from_millis(100));
        let bar_count: usize = SkillCategory::ALL.iter().map(|c| skills_for(*c).len()).sum();
        assert_eq!(tasks.len(), bar_count);

        for task in tasks {
            let Task::WidenSkillBar { bar, level } = task else {
                panic!("unexpected task {task:?}");
            };
            skills.widen(&mut h.cx(), bar, level);
        }
        let first = Node::SkillBar(SkillCategory::Frontend, 0);
        assert_eq!(h.doc.style(first, "width"), Some("90%"));
    }

    #[test]
    fn partially_visible_bars_wait() {
        let (mut h, mut skills) = init_offscreen();
        h.doc
            .set_bounds(Node::SkillBar(SkillCategory::Tools, 7), Bounds::new(2790.0, 20.0));

        h.doc.set_scroll_y(1800.0);
        skills.on_viewport_change(&mut h.cx());
        assert!(!h.state.is_animated(Node::SkillBar(SkillCategory::Tools, 7)));
        assert!(h.state.is_animated(Node::SkillBar(SkillCategory::Tools, 6)));
    }

    #[test]
    fn bars_animate_once() {
        let (mut h, mut skills) = init_offscreen();
        h.doc.set_scroll_y(1800.0);
        skills.on_viewport_change(&mut h.cx());
        let first = h.timers.pending_timers();

        skills.animate_bars(&mut h.cx());
        assert_eq!(h.timers.pending_timers(), first);
    }
}
