//! Transient UI state shared by the controllers.

use std::collections::HashSet;

use serde::Serialize;

use crate::ports::Node;
use crate::types::{ExperienceFilter, Theme};

/// All mutable UI state. Each field has a single owning controller; the app
/// lends the whole record to whichever controller is handling a task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub nav_open: bool,
    pub modal_open: bool,
    pub active_filter: ExperienceFilter,
    /// Elements that already played their one-shot reveal
    pub animated: HashSet<Node>,
    /// A contact submission is in flight
    pub is_loading: bool,
    pub nav_scrolled: bool,
    pub printing: bool,
    pub initialized: bool,
}

impl AppState {
    /// Record `node` as animated. Returns `false` if it already was.
    pub fn mark_animated(&mut self, node: Node) -> bool {
        self.animated.insert(node)
    }

    pub fn is_animated(&self, node: Node) -> bool {
        self.animated.contains(&node)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            theme: self.theme,
            nav_open: self.nav_open,
            modal_open: self.modal_open,
            active_filter: self.active_filter.as_str(),
            animated_count: self.animated.len(),
            is_loading: self.is_loading,
            nav_scrolled: self.nav_scrolled,
            printing: self.printing,
            initialized: self.initialized,
        }
    }
}

/// Serializable view of [`AppState`] for debugging and external inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub theme: Theme,
    pub nav_open: bool,
    pub modal_open: bool,
    pub active_filter: &'static str,
    pub animated_count: usize,
    pub is_loading: bool,
    pub nav_scrolled: bool,
    pub printing: bool,
    pub initialized: bool,
}
