//! Page controllers.
//!
//! Each controller owns a slice of [`AppState`] and the nodes it renders.
//! Handlers receive a [`Context`] that lends them the document, the state
//! record, the event loop and the bus for the duration of one task.

use std::time::Duration;

use rand::rngs::StdRng;

use crate::app::Task;
use crate::config::PortfolioConfig;
use crate::error::PortfolioResult;
use crate::events::EventBus;
use crate::ports::{Document, Node};
use crate::scheduler::EventLoop;
use crate::state::AppState;

pub mod experience;
pub mod form;
pub mod keyboard;
pub mod navigation;
pub mod print;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod theme;

pub use experience::ExperienceManager;
pub use form::FormManager;
pub use keyboard::{KeyboardShortcuts, Shortcut};
pub use navigation::NavigationManager;
pub use projects::ProjectsManager;
pub use reveal::ScrollReveal;
pub use skills::SkillsManager;
pub use theme::ThemeManager;

/// Class added by one-shot reveals
pub const ANIMATE_IN: &str = "animate-in";

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub state: &'a mut AppState,
    pub doc: &'a mut dyn Document,
    pub timers: &'a mut EventLoop<Task>,
    pub events: &'a mut EventBus,
    pub config: &'a PortfolioConfig,
    pub rng: &'a mut StdRng,
}

impl Context<'_> {
    pub fn now(&self) -> Duration {
        self.timers.now()
    }
}

/// A unit initialized once during bootstrap.
pub trait Module {
    fn name(&self) -> &'static str;
    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()>;
}

/// Add `class` to `node` the first time it is seen; later calls do nothing.
pub fn animate_element(cx: &mut Context<'_>, node: Node, class: &str) {
    if cx.state.mark_animated(node) {
        cx.doc.add_class(node, class);
    }
}

/// Format a pixel offset, never printing a negative zero.
pub(crate) fn px(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}
