//! Portfolio UI Components
//!
//! Dioxus building blocks for the portfolio page. Components are stateless:
//! they render what the core document says and forward user input as
//! callbacks, leaving every decision to `portfolio-core`.
//!
//! ## Class Names
//!
//! Class names follow the page's BEM scheme (`block__element--modifier`), so
//! the same stylesheet serves the desktop shell and the static site.

pub mod components;

pub use components::*;
