//! Fixed navigation bar with the mobile menu and theme switch.

use dioxus::prelude::*;
use portfolio_core::{Document, Node, SectionId, UiEvent};
use portfolio_ui::ThemeSwitch;

use crate::context::{class_of, dispatch, use_portfolio};

#[component]
pub fn NavBar() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let theme = guard.state().theme;

    let nav_class = class_of(doc, Node::Nav);
    let menu_class = class_of(doc, Node::NavMenu);
    let expanded = doc
        .attribute(Node::NavToggle, "aria-expanded")
        .unwrap_or_else(|| "false".to_string());
    let links: Vec<(SectionId, String)> = SectionId::ALL
        .into_iter()
        .map(|section| (section, class_of(doc, Node::NavLink(section))))
        .collect();

    rsx! {
        nav {
            class: "nav {nav_class}",
            id: "nav",
            // Clicks inside the nav never count as outside clicks
            onclick: move |e| e.stop_propagation(),
            div { class: "nav__container",
                a {
                    class: "nav__logo",
                    href: "#home",
                    onclick: move |e: MouseEvent| {
                        e.prevent_default();
                        dispatch(app, UiEvent::NavLinkClicked(SectionId::Home));
                    },
                    "Poovarasu"
                }
                ul { class: "nav__menu {menu_class}", id: "nav-menu",
                    for (section, link_class) in links {
                        li { key: "{section}", class: "nav__item",
                            a {
                                class: "{link_class}",
                                href: "#{section}",
                                onclick: move |e: MouseEvent| {
                                    e.prevent_default();
                                    dispatch(app, UiEvent::NavLinkClicked(section));
                                },
                                "{section.label()}"
                            }
                        }
                    }
                }
                div { class: "nav__actions",
                    ThemeSwitch {
                        theme,
                        on_change: move |checked| dispatch(app, UiEvent::ThemeToggleChanged { checked }),
                    }
                    button {
                        class: "nav__toggle",
                        id: "nav-toggle",
                        "aria-expanded": "{expanded}",
                        "aria-label": "Toggle navigation menu",
                        onclick: move |_| dispatch(app, UiEvent::NavToggleClicked),
                        span { class: "nav__toggle-bar" }
                        span { class: "nav__toggle-bar" }
                        span { class: "nav__toggle-bar" }
                    }
                }
            }
        }
    }
}
