//! Portfolio Core Library
//!
//! Behavior of a single-page developer portfolio: theme, navigation, the
//! contact form, rendered content and the ambient effects layered on top.
//!
//! ## Overview
//!
//! The page is modelled as a [`Document`] addressed by typed [`Node`]s.
//! Controllers mutate it in response to [`UiEvent`]s delivered by a host,
//! and every delayed or periodic action runs on a virtual-clock
//! [`EventLoop`], so the whole page can be driven deterministically.
//!
//! ## Core Principles
//!
//! - **Host-agnostic**: the desktop shell and the tests drive the same app
//! - **Deterministic**: time and randomness are owned by the app
//! - **Forgiving**: missing elements are skipped, never fatal
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use portfolio_core::{MemoryDocument, PortfolioApp, UiEvent};
//!
//! let mut app = PortfolioApp::new(MemoryDocument::standard());
//! app.init()?;
//!
//! // Flip to dark mode and let the effects run for a second
//! app.handle(UiEvent::ThemeToggleChanged { checked: true });
//! app.advance(Duration::from_secs(1));
//!
//! println!("{}", serde_json::to_string(&app.snapshot())?);
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod controllers;
pub mod effects;
pub mod error;
pub mod events;
pub mod form;
pub mod logging;
pub mod markup;
pub mod observer;
pub mod ports;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod timing;
pub mod types;

// Re-exports
pub use app::{PortfolioApp, PortfolioAppBuilder, Task, UiEvent};
pub use config::{ConfigPatch, PortfolioConfig, RevealMode};
pub use content::{
    find_experience, find_project, Experience, Project, Skill, EXPERIENCE, PROJECTS, SKILLS,
};
pub use error::{PortfolioError, PortfolioResult};
pub use events::{EventBus, PortfolioEvent};
pub use form::{
    validate, ContactMessage, FieldError, Outbox, SimulatedTransport, SubmissionTransport,
    SUBMISSION_FAILED_ALERT,
};
pub use observer::{IntersectionEntry, IntersectionObserver};
pub use ports::{
    Bounds, CanvasFrame, Document, Dot, Fragment, MemoryDocument, Node, Selector, Viewport,
};
pub use scheduler::{EventLoop, TimerId};
pub use state::{AppState, StateSnapshot};
pub use storage::{MemoryPreferences, PreferenceStore, RedbPreferences, THEME_KEY};
pub use timing::{Debounce, Throttle};
pub use types::*;
