//! Skill Row
//!
//! Name, percentage and progress bar. The bar starts empty; its width is
//! whatever the core document last set, so the fill animates via CSS.

use dioxus::prelude::*;

/// Displayed percentage, clamped to 100
pub fn level_label(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    pub name: String,
    pub level: u8,
    /// Class list of the row (picks up `animate-in`)
    #[props(default = "skill-item".to_string())]
    pub class: String,
    /// Inline style of the bar, e.g. `width: 90%;`
    #[props(default)]
    pub bar_style: String,
    /// `data-node` key so the host can report the row's geometry
    #[props(default)]
    pub layout_key: String,
}

#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let label = level_label(props.level);

    rsx! {
        div { class: "{props.class}", "data-node": "{props.layout_key}",
            div { class: "skill-item__info",
                span { class: "skill-item__name", "{props.name}" }
                span { class: "skill-item__level", "{label}" }
            }
            div { class: "skill-progress",
                div {
                    class: "skill-progress__bar",
                    "data-level": "{props.level}",
                    style: "{props.bar_style}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_label_formats_percent() {
        assert_eq!(level_label(85), "85%");
        assert_eq!(level_label(250), "100%");
    }
}
