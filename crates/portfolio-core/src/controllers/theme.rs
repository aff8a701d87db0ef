use tracing::{debug, info, warn};

use super::{Context, Module};
use crate::error::PortfolioResult;
use crate::events::PortfolioEvent;
use crate::ports::Node;
use crate::storage::{PreferenceStore, THEME_KEY};
use crate::types::Theme;

/// Applies and persists the light/dark theme.
pub struct ThemeManager {
    prefs: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    pub fn new(prefs: Box<dyn PreferenceStore>) -> Self {
        Self { prefs }
    }

    fn stored_theme(&self) -> Theme {
        match self.prefs.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Unknown stored theme, using light");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference");
                Theme::Light
            }
        }
    }

    pub fn set_theme(&mut self, cx: &mut Context<'_>, theme: Theme) {
        cx.state.theme = theme;
        cx.doc.set_attribute(Node::Root, "data-theme", theme.as_str());
        cx.doc.set_checked(Node::ThemeToggle, theme.is_dark());

        if let Err(e) = self.prefs.set(THEME_KEY, theme.as_str()) {
            warn!(error = %e, "Failed to persist theme preference");
        }

        info!(%theme, "Theme applied");
        cx.events.emit(PortfolioEvent::ThemeChanged(theme));
    }

    pub fn toggle(&mut self, cx: &mut Context<'_>) {
        let next = cx.state.theme.toggled();
        self.set_theme(cx, next);
    }

    /// The theme checkbox changed: checked means dark.
    pub fn on_toggle_changed(&mut self, cx: &mut Context<'_>, checked: bool) {
        debug!(checked, "Theme toggle changed");
        let theme = if checked { Theme::Dark } else { Theme::Light };
        self.set_theme(cx, theme);
    }
}

impl Module for ThemeManager {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        let theme = self.stored_theme();
        self.set_theme(cx, theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::Harness;
    use crate::ports::Document;
    use crate::storage::MemoryPreferences;

    #[test]
    fn init_defaults_to_light() {
        let mut h = Harness::new();
        let prefs = MemoryPreferences::new();
        let mut theme = ThemeManager::new(Box::new(prefs.clone()));
        theme.init(&mut h.cx()).unwrap();

        assert_eq!(h.state.theme, Theme::Light);
        assert_eq!(h.doc.attribute(Node::Root, "data-theme").as_deref(), Some("light"));
        assert!(!h.doc.is_checked(Node::ThemeToggle));
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let mut h = Harness::new();
        let prefs = MemoryPreferences::new().with(THEME_KEY, "solarized");
        let mut theme = ThemeManager::new(Box::new(prefs));
        theme.init(&mut h.cx()).unwrap();
        assert_eq!(h.state.theme, Theme::Light);
    }

    #[test]
    fn double_toggle_restores_and_persists() {
        let mut h = Harness::new();
        let prefs = MemoryPreferences::new();
        let mut theme = ThemeManager::new(Box::new(prefs.clone()));
        theme.init(&mut h.cx()).unwrap();

        theme.toggle(&mut h.cx());
        assert_eq!(h.state.theme, Theme::Dark);
        assert!(h.doc.is_checked(Node::ThemeToggle));
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        theme.toggle(&mut h.cx());
        assert_eq!(h.state.theme, Theme::Light);
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn every_apply_emits_a_change() {
        let mut h = Harness::new();
        let mut theme = ThemeManager::new(Box::new(MemoryPreferences::new()));
        theme.init(&mut h.cx()).unwrap();
        theme.on_toggle_changed(&mut h.cx(), true);

        assert_eq!(
            h.events.drain_local(),
            vec![
                PortfolioEvent::ThemeChanged(Theme::Light),
                PortfolioEvent::ThemeChanged(Theme::Dark)
            ]
        );
    }

    #[test]
    fn missing_toggle_is_not_an_error() {
        let mut h = Harness::with_doc(crate::ports::MemoryDocument::empty());
        let mut theme = ThemeManager::new(Box::new(MemoryPreferences::new()));
        theme.init(&mut h.cx()).unwrap();
        theme.toggle(&mut h.cx());
        assert_eq!(h.state.theme, Theme::Dark);
    }
}
