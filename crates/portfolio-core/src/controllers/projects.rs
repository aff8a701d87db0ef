use tracing::debug;

use super::{Context, Module};
use crate::content::find_project;
use crate::error::PortfolioResult;
use crate::markup::{project_cards, project_details};
use crate::ports::Node;

/// Project cards and the detail modal.
#[derive(Debug, Default)]
pub struct ProjectsManager;

impl ProjectsManager {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&mut self, cx: &mut Context<'_>) {
        if cx.doc.contains(Node::ProjectsGrid) {
            cx.doc.replace_children(Node::ProjectsGrid, project_cards());
        }
    }

    /// A card was clicked. Clicks inside the card's link row follow the link
    /// instead of opening the modal.
    pub fn on_card_clicked(&mut self, cx: &mut Context<'_>, id: &str, on_links: bool) {
        if !on_links {
            self.open(cx, id);
        }
    }

    pub fn open(&mut self, cx: &mut Context<'_>, id: &str) {
        let Some(project) = find_project(id) else {
            debug!(id, "Unknown project id");
            return;
        };
        if !cx.doc.contains(Node::Modal) {
            return;
        }

        cx.doc.set_text(Node::ModalTitle, project.title);
        cx.doc
            .replace_children(Node::ModalBody, project_details(project));
        self.show(cx);
    }

    fn show(&mut self, cx: &mut Context<'_>) {
        cx.state.modal_open = true;
        cx.doc.set_attribute(Node::Modal, "aria-hidden", "false");
        cx.doc.set_style(Node::Body, "overflow", "hidden");
        cx.doc.focus_first_within(Node::Modal);
    }

    pub fn close(&mut self, cx: &mut Context<'_>) {
        cx.state.modal_open = false;
        cx.doc.set_attribute(Node::Modal, "aria-hidden", "true");
        cx.doc.set_style(Node::Body, "overflow", "");
    }

    pub fn on_escape(&mut self, cx: &mut Context<'_>) {
        if cx.state.modal_open {
            self.close(cx);
        }
    }
}

impl Module for ProjectsManager {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.render(cx);
        Ok(())
    }
}
