//! Application notifications.
//!
//! External listeners subscribe through a tokio broadcast channel. Internal
//! consumers (the rain effect reacting to theme changes) read a local queue
//! that the app drains after every task, so they never depend on a runtime.

use std::collections::VecDeque;

use tokio::sync::broadcast;
use tracing::trace;

use crate::types::Theme;

/// Default capacity for event broadcast channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEvent {
    /// The active theme changed (also emitted for the initial apply)
    ThemeChanged(Theme),
    /// Bootstrap finished
    Ready,
}

#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<PortfolioEvent>,
    local: VecDeque<PortfolioEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            tx,
            local: VecDeque::new(),
        }
    }

    pub fn emit(&mut self, event: PortfolioEvent) {
        trace!(?event, "emit");
        // No subscribers is fine
        let _ = self.tx.send(event.clone());
        self.local.push_back(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PortfolioEvent> {
        self.tx.subscribe()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_local(&mut self) -> Vec<PortfolioEvent> {
        self.local.drain(..).collect()
    }
}
