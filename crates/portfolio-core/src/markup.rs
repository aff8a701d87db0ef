//! HTML fragments for the static content collections.
//!
//! Every interpolated value goes through [`escape`]. Elements whose geometry
//! the host must report carry a `data-node` attribute holding their
//! [`Node::layout_key`].

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::content::{skills_for, Experience, Project, EXPERIENCE, PROJECTS};
use crate::ports::{Fragment, Node};
use crate::types::{ExperienceFilter, SkillCategory};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn layout_attr(node: Node) -> String {
    node.layout_key()
        .map(|key| format!(" data-node=\"{}\"", escape(&key)))
        .unwrap_or_default()
}

fn tags(class: &str, items: &[&str]) -> String {
    let mut out = format!("<div class=\"{class}\">");
    for item in items {
        let _ = write!(out, "<span class=\"tag\">{}</span>", escape(item));
    }
    out.push_str("</div>");
    out
}

/// Skill rows for one category.
pub fn skill_items(category: SkillCategory) -> Fragment {
    let mut fragment = Fragment::new();

    for (i, skill) in skills_for(category).iter().enumerate() {
        let item = Node::SkillItem(category, i);
        let bar = Node::SkillBar(category, i);
        let _ = write!(
            fragment.markup,
            "<div class=\"skill-item\"{item_attr}>\
             <div class=\"skill-item__info\">\
             <span class=\"skill-item__name\">{name}</span>\
             <span class=\"skill-item__level\">{level}%</span>\
             </div>\
             <div class=\"skill-progress\">\
             <div class=\"skill-progress__bar\" data-level=\"{level}\"{bar_attr}></div>\
             </div>\
             </div>",
            item_attr = layout_attr(item),
            bar_attr = layout_attr(bar),
            name = escape(skill.name),
            level = skill.level,
        );
        fragment.declare(item, &["skill-item"]);
        fragment.declare_nested(bar, item, &["skill-progress__bar"]);
    }

    fragment
}

fn project_card(out: &mut String, project: &Project) {
    let node = Node::ProjectCard(project.id);
    let _ = write!(
        out,
        "<article class=\"project-card\" data-project-id=\"{id}\"{attr}>\
         <div class=\"project-card__image\">\
         <img src=\"{image}\" alt=\"{title}\" loading=\"lazy\">\
         </div>\
         <div class=\"project-card__content\">\
         <h3 class=\"project-card__title\">{title}</h3>\
         <p class=\"project-card__description\">{description}</p>\
         {tags}\
         <div class=\"project-card__links\">\
         <a href=\"{live}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-link\">Live Demo</a>\
         <a href=\"{repo}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-link\">View Code</a>\
         </div>\
         </div>\
         </article>",
        id = escape(project.id),
        attr = layout_attr(node),
        image = escape(project.image),
        title = escape(project.title),
        description = escape(project.description),
        tags = tags("project-card__tags", project.tags),
        live = escape(project.live_url),
        repo = escape(project.repo_url),
    );
}

/// Cards for every project, in source order.
pub fn project_cards() -> Fragment {
    let mut fragment = Fragment::new();
    for project in PROJECTS {
        project_card(&mut fragment.markup, project);
        fragment.declare(Node::ProjectCard(project.id), &["project-card"]);
    }
    fragment
}

/// Body of the project detail modal.
pub fn project_details(project: &Project) -> Fragment {
    let details = &project.details;
    let mut features = String::new();
    for feature in details.features {
        let _ = write!(features, "<li>{}</li>", escape(feature));
    }

    let mut fragment = Fragment::new();
    let _ = write!(
        fragment.markup,
        "<div class=\"modal-project\">\
         <div class=\"modal-project__image\">\
         <img src=\"{image}\" alt=\"{title}\">\
         </div>\
         <div class=\"modal-project__content\">\
         <p class=\"modal-project__overview\">{overview}</p>\
         <div class=\"modal-project__section\"><h4>Key Features</h4><ul>{features}</ul></div>\
         <div class=\"modal-project__section\"><h4>Technologies Used</h4>{technologies}</div>\
         <div class=\"modal-project__section\"><h4>Challenges &amp; Solutions</h4><p>{challenges}</p></div>\
         <div class=\"modal-project__links\">\
         <a href=\"{live}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"btn btn--primary\">View Live Project</a>\
         <a href=\"{repo}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"btn btn--secondary\">View Source Code</a>\
         </div>\
         </div>\
         </div>",
        image = escape(project.image),
        title = escape(project.title),
        overview = escape(details.overview),
        features = features,
        technologies = tags("modal-project__tags", details.technologies),
        challenges = escape(details.challenges),
        live = escape(project.live_url),
        repo = escape(project.repo_url),
    );
    fragment
}

/// Entries of `entries` that pass `filter`, in source order.
pub fn filter_experience(
    entries: &'static [Experience],
    filter: ExperienceFilter,
) -> impl Iterator<Item = &'static Experience> {
    entries.iter().filter(move |e| filter.matches(e.kind))
}

/// Timeline items for the shipped experience list.
pub fn timeline(filter: ExperienceFilter) -> Fragment {
    timeline_from(EXPERIENCE, filter)
}

/// Timeline items for an arbitrary entry list.
pub fn timeline_from(entries: &'static [Experience], filter: ExperienceFilter) -> Fragment {
    let mut fragment = Fragment::new();

    for item in filter_experience(entries, filter) {
        let node = Node::TimelineItem(item.id);
        let _ = write!(
            fragment.markup,
            "<div class=\"timeline-item\" data-type=\"{kind}\"{attr}>\
             <div class=\"timeline-item__marker\"></div>\
             <div class=\"timeline-item__content\">\
             <div class=\"timeline-item__date\">{date}</div>\
             <h3 class=\"timeline-item__title\">{title}</h3>\
             <p class=\"timeline-item__subtitle\">{organization}</p>\
             <p class=\"timeline-item__description\">{description}</p>\
             {tags}\
             </div>\
             </div>",
            kind = item.kind.as_str(),
            attr = layout_attr(node),
            date = escape(item.date),
            title = escape(item.title),
            organization = escape(item.organization),
            description = escape(item.description),
            tags = tags("timeline-item__tags", item.tags),
        );
        fragment.declare(node, &["timeline-item"]);
    }

    fragment
}
