//! Theme Switch
//!
//! Checkbox toggle in the nav bar. Checked means dark.

use dioxus::prelude::*;
use portfolio_core::Theme;

/// Accessible label describing what a click will do
pub fn switch_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

#[component]
pub fn ThemeSwitch(theme: Theme, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "theme-toggle", title: switch_label(theme),
            input {
                id: "theme-toggle",
                class: "theme-toggle__input",
                r#type: "checkbox",
                checked: theme.is_dark(),
                "aria-label": switch_label(theme),
                onchange: move |e| on_change.call(e.checked()),
            }
            span { class: "theme-toggle__slider" }
        }
    }
}
