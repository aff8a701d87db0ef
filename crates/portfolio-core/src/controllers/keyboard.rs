use tracing::debug;

use super::{Context, Module};
use crate::error::PortfolioResult;
use crate::types::{KeyTarget, SectionId};

/// Action bound to a single-key shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ScrollTo(SectionId),
    ToggleTheme,
}

/// `g` jumps to projects, `c` to contact, `t` toggles the theme.
#[derive(Debug, Default)]
pub struct KeyboardShortcuts {
    enabled: bool,
}

impl KeyboardShortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resolve a key press. Keys typed into text fields never trigger.
    pub fn resolve(&self, key: &str, target: KeyTarget) -> Option<Shortcut> {
        if !self.enabled || target.is_text_entry() {
            return None;
        }
        match key.to_lowercase().as_str() {
            "g" => Some(Shortcut::ScrollTo(SectionId::Projects)),
            "c" => Some(Shortcut::ScrollTo(SectionId::Contact)),
            "t" => Some(Shortcut::ToggleTheme),
            _ => None,
        }
    }
}

impl Module for KeyboardShortcuts {
    fn name(&self) -> &'static str {
        "keyboard"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.enabled = cx.config.keyboard_shortcuts;
        debug!(enabled = self.enabled, "Keyboard shortcuts");
        Ok(())
    }
}
