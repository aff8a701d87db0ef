//! Experience Filter Pills
//!
//! Row of buttons above the timeline. The active pill comes from the core
//! state; clicks report the raw `data-filter` value back.

use dioxus::prelude::*;
use portfolio_core::ExperienceFilter;

/// Class list of one pill
pub fn pill_class(filter: ExperienceFilter, active: ExperienceFilter) -> &'static str {
    if filter == active {
        "filter-btn filter-btn--active"
    } else {
        "filter-btn"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub active: ExperienceFilter,
    /// Receives the clicked pill's `data-filter` value
    pub on_select: EventHandler<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         active: state.active_filter,
///         on_select: move |raw| app.handle(UiEvent::FilterClicked(raw))
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "experience__filters",
            role: "radiogroup",
            "aria-label": "Filter experience",
            for filter in ExperienceFilter::ALL {
                {
                    let on_select = props.on_select;
                    let is_active = filter == props.active;
                    rsx! {
                        button {
                            class: pill_class(filter, props.active),
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            "data-filter": filter.as_str(),
                            onclick: move |_| on_select.call(filter.as_str().to_string()),
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
