//! App context provider for the portfolio shell.
//!
//! The root component owns the [`PortfolioApp`] in a signal and provides it
//! to the page; components read the document from it and send
//! [`UiEvent`]s back through [`dispatch`].
//!
//! ## Usage
//!
//! ```ignore
//! let app = use_portfolio();
//! let theme = app.read().state().theme;
//! dispatch(app, UiEvent::NavToggleClicked);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{
    MemoryDocument, MemoryPreferences, Node, PortfolioApp, PortfolioConfig, RedbPreferences,
    UiEvent,
};

use crate::bridge::{alert_script, focus_script, scroll_script};
pub use crate::launch_options;

/// The app instance driven by the shell
pub type Portfolio = PortfolioApp<MemoryDocument>;

/// Location of the theme preference database
pub fn preferences_path() -> PathBuf {
    launch_options().data_dir.join("preferences.redb")
}

/// Build the app from the launch options. Storage or config problems are
/// logged and replaced by in-memory defaults so the page always comes up.
pub fn build_portfolio() -> Portfolio {
    let options = launch_options();

    let config = PortfolioConfig::load(&options.config_path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring config {:?}: {}", options.config_path, e);
        PortfolioConfig::default()
    });

    let mut builder = PortfolioApp::builder(MemoryDocument::standard()).config(config);
    builder = match RedbPreferences::open(preferences_path()) {
        Ok(prefs) => builder.preferences(prefs),
        Err(e) => {
            tracing::warn!("Theme preference will not persist: {}", e);
            builder.preferences(MemoryPreferences::new())
        }
    };
    if let Some(seed) = options.seed {
        builder = builder.seed(seed);
    }

    let mut app = builder.build();
    if let Err(e) = app.init() {
        tracing::error!("Portfolio failed to start: {}", e);
    }
    app
}

/// Hook to access the app from context.
pub fn use_portfolio() -> Signal<Portfolio> {
    use_context::<Signal<Portfolio>>()
}

/// Side effects the core recorded on the document that only the webview can
/// perform: scrolling, blocking alerts and focus.
#[derive(Debug, Clone, Copy)]
pub struct WebviewMarks {
    scrolls: usize,
    alerts: usize,
    focus: usize,
}

impl WebviewMarks {
    pub fn of(doc: &MemoryDocument) -> Self {
        Self {
            scrolls: doc.scroll_requests().len(),
            alerts: doc.alerts().len(),
            focus: doc.focus_requests().len(),
        }
    }

    /// Scripts replaying everything recorded since these marks were taken
    pub fn scripts_since(&self, doc: &MemoryDocument) -> Vec<String> {
        let mut scripts = Vec::new();
        if let Some(top) = doc.scroll_requests().get(self.scrolls..).and_then(|r| r.last()) {
            scripts.push(scroll_script(*top));
        }
        if let Some(node) = doc.focus_requests().get(self.focus..).and_then(|r| r.last()) {
            scripts.extend(focus_script(*node));
        }
        for message in doc.alerts().get(self.alerts..).unwrap_or_default() {
            scripts.push(alert_script(message));
        }
        scripts
    }
}

fn replay(scripts: Vec<String>) {
    for script in scripts {
        document::eval(&script);
    }
}

/// Forward one page event to the app, then replay on the webview whatever
/// it asked for.
pub fn dispatch(mut app: Signal<Portfolio>, event: UiEvent) {
    let scripts = {
        let mut app = app.write();
        let marks = WebviewMarks::of(app.document());
        app.handle(event);
        marks.scripts_since(app.document())
    };
    replay(scripts);
}

/// Move the app's clock forward. Timers can raise alerts (a failed
/// submission) or scroll, so those are replayed too.
pub fn advance(mut app: Signal<Portfolio>, dt: Duration) {
    let scripts = {
        let mut app = app.write();
        let marks = WebviewMarks::of(app.document());
        app.advance(dt);
        marks.scripts_since(app.document())
    };
    replay(scripts);
}

/// Class attribute of `node` as the document currently has it
pub fn class_of(doc: &MemoryDocument, node: Node) -> String {
    doc.node(node).map(|n| n.class_list()).unwrap_or_default()
}

/// Inline style of `node` as the document currently has it
pub fn style_of(doc: &MemoryDocument, node: Node) -> String {
    doc.node(node).map(|n| n.inline_style()).unwrap_or_default()
}

/// `data-node` value for elements whose geometry the bridge reports
pub fn layout_key(node: Node) -> String {
    node.layout_key().unwrap_or_default()
}
