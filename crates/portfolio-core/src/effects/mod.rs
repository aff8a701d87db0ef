//! Cosmetic background effects.
//!
//! None of these carry state the rest of the page depends on. They only
//! write styles and transient nodes, driven by repeating timers.

mod glitch;
mod matrix;
mod parallax;
mod particles;

pub use glitch::GlitchText;
pub use matrix::{MatrixRain, MATRIX_CHARS};
pub use parallax::MouseParallax;
pub use particles::{Particle, ParticleSystem, FRAME_INTERVAL};

use crate::controllers::{Context, Module};
use crate::error::PortfolioResult;
use crate::ports::Document;
use crate::types::Theme;

/// Which offset copy of a glitching heading a layer is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlitchChannel {
    Red,
    Blue,
}

impl GlitchChannel {
    pub const ALL: [GlitchChannel; 2] = [GlitchChannel::Red, GlitchChannel::Blue];

    pub fn class(&self) -> &'static str {
        match self {
            GlitchChannel::Red => "glitch-red",
            GlitchChannel::Blue => "glitch-blue",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            GlitchChannel::Red => "rgba(255, 0, 0, 0.3)",
            GlitchChannel::Blue => "rgba(0, 255, 255, 0.3)",
        }
    }
}

/// Matrix rain, mouse parallax and glitch text, initialized together.
#[derive(Debug, Default)]
pub struct CyberpunkEffects {
    pub matrix: MatrixRain,
    pub parallax: MouseParallax,
    pub glitch: GlitchText,
}

impl CyberpunkEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mouse_move(&mut self, cx: &mut Context<'_>, x: f64, y: f64) {
        self.parallax.on_mouse_move(cx, x, y);
    }

    pub fn on_theme_changed(&mut self, doc: &mut dyn Document, theme: Theme) {
        self.matrix.on_theme_changed(doc, theme);
    }
}

impl Module for CyberpunkEffects {
    fn name(&self) -> &'static str {
        "cyberpunk-effects"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.matrix.init(cx);
        self.parallax.init(cx);
        self.glitch.init(cx);
        Ok(())
    }
}
