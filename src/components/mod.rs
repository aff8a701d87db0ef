//! Page regions of the portfolio shell.
//!
//! Each region reads the core document through [`crate::context`] and sends
//! user input back as `UiEvent`s; none of them keep state of their own.

mod backdrop;
mod modal;
mod nav;
mod sections;

pub use backdrop::{FloatingShapes, MatrixLayer, ParticleLayer};
pub use modal::ProjectModal;
pub use nav::NavBar;
pub use sections::{About, Contact, Experience, Hero, Projects, Skills};
