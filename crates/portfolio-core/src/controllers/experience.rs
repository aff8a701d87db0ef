use std::time::Duration;

use tracing::debug;

use super::{Context, Module};
use crate::app::Task;
use crate::error::PortfolioResult;
use crate::markup::timeline;
use crate::ports::{Node, Selector};
use crate::scheduler::TimerId;
use crate::types::ExperienceFilter;

/// Delay between consecutive timeline items fading in
const FADE_STAGGER: Duration = Duration::from_millis(200);

/// Filterable experience timeline.
#[derive(Debug, Default)]
pub struct ExperienceManager {
    fades: Vec<TimerId>,
}

impl ExperienceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, cx: &mut Context<'_>, filter: ExperienceFilter) {
        if !cx.doc.contains(Node::ExperienceTimeline) {
            return;
        }
        cx.doc
            .replace_children(Node::ExperienceTimeline, timeline(filter));
        self.animate_items(cx);
    }

    /// Fade the rendered items in one after another. Fades still pending
    /// from a previous render belong to removed items and are dropped.
    fn animate_items(&mut self, cx: &mut Context<'_>) {
        for id in self.fades.drain(..) {
            cx.timers.cancel(id);
        }
        let items = cx.doc.query(Node::Root, Selector::Class("timeline-item"));
        for (index, item) in items.into_iter().enumerate() {
            let id = cx
                .timers
                .schedule_after(FADE_STAGGER * index as u32, Task::FadeInTimelineItem(item));
            self.fades.push(id);
        }
    }

    pub fn fade_in(&mut self, cx: &mut Context<'_>, item: Node) {
        cx.doc.set_style(item, "opacity", "1");
    }

    pub fn filter(&mut self, cx: &mut Context<'_>, filter: ExperienceFilter) {
        debug!(%filter, "Filtering experience");
        cx.state.active_filter = filter;
        for candidate in ExperienceFilter::ALL {
            cx.doc
                .set_class(Node::FilterButton(candidate), "filter-btn--active", candidate == filter);
        }
        self.render(cx, filter);
    }

    /// A filter button was clicked with its raw `data-filter` value. A value
    /// naming no experience type leaves the timeline empty.
    pub fn on_filter_clicked(&mut self, cx: &mut Context<'_>, raw: &str) {
        self.filter(cx, ExperienceFilter::from_attribute(raw));
    }
}

impl Module for ExperienceManager {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.render(cx, ExperienceFilter::All);
        Ok(())
    }
}
