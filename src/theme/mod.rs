//! Stylesheet for the portfolio shell.

mod styles;

pub use styles::GLOBAL_STYLES;
