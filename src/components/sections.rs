//! Content sections, top to bottom.

use dioxus::prelude::*;
use portfolio_core::content::skills_for;
use portfolio_core::effects::GlitchChannel;
use portfolio_core::ports::HERO_NAME;
use portfolio_core::{
    find_experience, find_project, Document, Experience as ExperienceEntry, FieldName,
    MemoryDocument, Node, Project, SectionId, Skill, SkillCategory, UiEvent,
};
use portfolio_ui::{Button, ButtonVariant, FilterPills, FormField, LinkButton, SkillBar};

use crate::context::{class_of, dispatch, layout_key, style_of, use_portfolio};

/// Section wrapper: heading in the first staggered child, body in the second.
#[component]
fn SectionFrame(section: SectionId, title: String, subtitle: String, children: Element) -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let class = class_of(doc, Node::Section(section));
    let key = layout_key(Node::Section(section));
    let header_class = class_of(doc, Node::AnimateChild(section, 0));
    let body_class = class_of(doc, Node::AnimateChild(section, 1));

    rsx! {
        section { class: "{class} {section}", id: "{section}", "data-node": "{key}",
            div { class: "container",
                header { class: "section__header {header_class}",
                    h2 { class: "section__title", "{title}" }
                    p { class: "section__subtitle", "{subtitle}" }
                }
                div { class: "{body_class}", {children} }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let section = SectionId::Home;
    let class = class_of(doc, Node::Section(section));
    let key = layout_key(Node::Section(section));
    let title_class = class_of(doc, Node::AnimateChild(section, 0));
    let actions_class = class_of(doc, Node::AnimateChild(section, 1));
    let glitch_style = style_of(doc, Node::GlitchText(0));
    let layers: Vec<(&'static str, String)> = GlitchChannel::ALL
        .into_iter()
        .filter(|c| doc.contains(Node::GlitchLayer(0, *c)))
        .map(|c| (c.class(), style_of(doc, Node::GlitchLayer(0, c))))
        .collect();

    rsx! {
        section { class: "{class} hero", id: "home", "data-node": "{key}",
            div { class: "hero__content container",
                h1 { class: "hero__title {title_class}",
                    "Hi, I'm "
                    span { class: "glitch", "data-text": HERO_NAME, style: "{glitch_style}",
                        "{HERO_NAME}"
                        for (layer_class, layer_style) in layers {
                            span { key: "{layer_class}", class: "{layer_class}", style: "{layer_style}", "{HERO_NAME}" }
                        }
                    }
                }
                div { class: "hero__actions {actions_class}",
                    p { class: "hero__subtitle", "Frontend developer building fast, accessible interfaces." }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| dispatch(app, UiEvent::NavLinkClicked(SectionId::Projects)),
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dispatch(app, UiEvent::NavLinkClicked(SectionId::Contact)),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        SectionFrame {
            section: SectionId::About,
            title: "About Me".to_string(),
            subtitle: "A little about who I am".to_string(),
            p { class: "about__text",
                "I'm a frontend developer who enjoys turning designs into responsive, accessible "
                "interfaces. I care about performance, clean code and the small details that make "
                "a site feel good to use."
            }
        }
    }
}

/// Skill items the core rendered into `category`'s container.
fn skill_rows(doc: &MemoryDocument, category: SkillCategory) -> Vec<(Node, &'static Skill)> {
    doc.children(Node::SkillsContainer(category))
        .into_iter()
        .filter_map(|item| match item {
            Node::SkillItem(c, i) => skills_for(c).get(i).map(|skill| (item, skill)),
            _ => None,
        })
        .collect()
}

/// Project cards the core rendered into the grid.
fn project_rows(doc: &MemoryDocument) -> Vec<(Node, &'static Project)> {
    doc.children(Node::ProjectsGrid)
        .into_iter()
        .filter_map(|node| match node {
            Node::ProjectCard(id) => find_project(id).map(|project| (node, project)),
            _ => None,
        })
        .collect()
}

/// Timeline items the core rendered for the active filter.
fn timeline_rows(doc: &MemoryDocument) -> Vec<(Node, &'static ExperienceEntry)> {
    doc.children(Node::ExperienceTimeline)
        .into_iter()
        .filter_map(|node| match node {
            Node::TimelineItem(id) => find_experience(id).map(|entry| (node, entry)),
            _ => None,
        })
        .collect()
}

/// Skill rows, one per item the core rendered into each category container.
#[component]
pub fn Skills() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();

    let categories: Vec<(SkillCategory, Vec<(Node, &'static Skill, String, String)>)> =
        SkillCategory::ALL
            .into_iter()
            .map(|category| {
                let rows = skill_rows(doc, category)
                    .into_iter()
                    .map(|(item, skill)| {
                        let bar = match item {
                            Node::SkillItem(c, i) => Node::SkillBar(c, i),
                            other => other,
                        };
                        (item, skill, class_of(doc, item), style_of(doc, bar))
                    })
                    .collect();
                (category, rows)
            })
            .collect();

    rsx! {
        SectionFrame {
            section: SectionId::Skills,
            title: "Skills".to_string(),
            subtitle: "Technologies I work with".to_string(),
            div { class: "skills__grid",
                for (category, rows) in categories {
                    div { key: "{category.as_str()}", class: "skills__category",
                        h3 { class: "skills__category-title", "{category.title()}" }
                        div { class: "skills__list", id: "{category.as_str()}-skills",
                            for (item, skill, class, bar_style) in rows {
                                SkillBar {
                                    key: "{layout_key(item)}",
                                    name: skill.name.to_string(),
                                    level: skill.level,
                                    class,
                                    bar_style,
                                    layout_key: layout_key(item),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Project cards in the order the core rendered them into the grid.
#[component]
pub fn Projects() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let cards: Vec<(&'static Project, String, String)> = project_rows(doc)
        .into_iter()
        .map(|(node, project)| (project, class_of(doc, node), layout_key(node)))
        .collect();

    rsx! {
        SectionFrame {
            section: SectionId::Projects,
            title: "Projects".to_string(),
            subtitle: "Things I've built".to_string(),
            div { class: "projects__grid", id: "projects-grid",
                for (project, class, key) in cards {
                    {
                        let id = project.id;
                        rsx! {
                            article {
                                key: "{id}",
                                class: "{class}",
                                "data-project-id": "{id}",
                                "data-node": "{key}",
                                onclick: move |_| dispatch(app, UiEvent::ProjectCardClicked { id: id.to_string(), on_links: false }),
                                div { class: "project-card__image",
                                    img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                                }
                                div { class: "project-card__content",
                                    h3 { class: "project-card__title", "{project.title}" }
                                    p { class: "project-card__description", "{project.description}" }
                                    div { class: "project-card__tags",
                                        for tag in project.tags.iter() {
                                            span { key: "{tag}", class: "tag", "{tag}" }
                                        }
                                    }
                                    div {
                                        class: "project-card__links",
                                        onclick: move |e: MouseEvent| {
                                            e.stop_propagation();
                                            dispatch(app, UiEvent::ProjectCardClicked { id: id.to_string(), on_links: true });
                                        },
                                        LinkButton { variant: ButtonVariant::Primary, href: project.live_url.to_string(), "Live Demo" }
                                        LinkButton { variant: ButtonVariant::Secondary, href: project.repo_url.to_string(), "View Code" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Timeline items currently rendered by the core for the active filter.
#[component]
pub fn Experience() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();
    let active = guard.state().active_filter;
    let items: Vec<(&'static ExperienceEntry, String, String, String)> = timeline_rows(doc)
        .into_iter()
        .map(|(node, entry)| (entry, class_of(doc, node), style_of(doc, node), layout_key(node)))
        .collect();

    rsx! {
        SectionFrame {
            section: SectionId::Experience,
            title: "Experience".to_string(),
            subtitle: "Where I've worked".to_string(),
            FilterPills {
                active,
                on_select: move |raw| dispatch(app, UiEvent::FilterClicked(raw)),
            }
            div { class: "timeline", id: "experience-timeline",
                for (entry, class, style, key) in items {
                    div {
                        key: "{entry.id}",
                        class: "{class}",
                        style: "{style}",
                        "data-type": entry.kind.as_str(),
                        "data-node": "{key}",
                        div { class: "timeline-item__marker" }
                        div { class: "timeline-item__content",
                            div { class: "timeline-item__date", "{entry.date}" }
                            h3 { class: "timeline-item__title", "{entry.title}" }
                            p { class: "timeline-item__subtitle", "{entry.organization}" }
                            p { class: "timeline-item__description", "{entry.description}" }
                            div { class: "timeline-item__tags",
                                for tag in entry.tags.iter() {
                                    span { key: "{tag}", class: "tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let app = use_portfolio();
    let guard = app.read();
    let doc = guard.document();

    let form_style = style_of(doc, Node::ContactForm);
    let success_style = style_of(doc, Node::ContactSuccess);
    let text_style = style_of(doc, Node::SubmitText);
    let loading_style = style_of(doc, Node::SubmitLoading);
    let fields: Vec<(FieldName, String, String, bool)> = FieldName::ALL
        .into_iter()
        .map(|field| {
            (
                field,
                doc.value(Node::Field(field)).unwrap_or_default(),
                doc.text(Node::FieldError(field)).unwrap_or_default().to_string(),
                doc.has_class(Node::Field(field), "error"),
            )
        })
        .collect();

    rsx! {
        SectionFrame {
            section: SectionId::Contact,
            title: "Get In Touch".to_string(),
            subtitle: "Have a project in mind? Let's talk.".to_string(),
            form {
                class: "contact__form",
                id: "contact-form",
                novalidate: true,
                style: "{form_style}",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    dispatch(app, UiEvent::FormSubmitted);
                },
                for (field, value, error, has_error) in fields {
                    FormField {
                        key: "{field.as_str()}",
                        field,
                        value,
                        error,
                        has_error,
                        oninput: move |value| dispatch(app, UiEvent::FieldInput { field, value }),
                        onblur: move |_| dispatch(app, UiEvent::FieldBlurred(field)),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit".to_string(),
                    disabled: doc.is_disabled(Node::SubmitButton),
                    class: "contact__submit".to_string(),
                    span { class: "btn__text", style: "{text_style}", "Send Message" }
                    span { class: "btn__loading", style: "{loading_style}", "Sending..." }
                }
            }
            div { class: "contact__success", id: "contact-success", style: "{success_style}",
                h3 { "Thank you!" }
                p { "Your message has been sent. I'll get back to you soon." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{PortfolioApp, PROJECTS, SKILLS};

    fn started() -> PortfolioApp<MemoryDocument> {
        let mut app = PortfolioApp::builder(MemoryDocument::standard()).seed(5).build();
        app.init().unwrap();
        app
    }

    #[test]
    fn rows_follow_rendered_nodes() {
        let app = started();
        let doc = app.document();

        let projects: Vec<_> = project_rows(doc).iter().map(|(_, p)| p.id).collect();
        let expected: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(projects, expected);

        let skills: usize = SkillCategory::ALL
            .into_iter()
            .map(|c| skill_rows(doc, c).len())
            .sum();
        assert_eq!(skills, SKILLS.iter().map(|g| g.skills.len()).sum::<usize>());
    }

    #[test]
    fn timeline_rows_track_the_filter() {
        let mut app = started();
        app.handle(UiEvent::FilterClicked("freelance".into()));
        let ids: Vec<_> = timeline_rows(app.document()).iter().map(|(_, e)| e.id).collect();
        assert_eq!(ids, vec!["freelance-frontend"]);

        app.handle(UiEvent::FilterClicked("education".into()));
        assert!(timeline_rows(app.document()).is_empty());
    }
}
