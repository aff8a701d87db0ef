//! Canvas particle field fed by pointer movement and a background spawner.

use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::app::Task;
use crate::controllers::{Context, Module};
use crate::error::PortfolioResult;
use crate::ports::{CanvasFrame, Dot, Fragment, Node};
use crate::timing::Debounce;
use crate::types::Theme;

/// Roughly one display refresh
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const SPAWN_INTERVAL: Duration = Duration::from_millis(1000);
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);
const MOUSE_SPAWN_ABOVE: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining life in `0.0..=1.0`, drawn as alpha
    pub life: f64,
    pub decay: f64,
    pub size: f64,
    pub color: String,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, x: f64, y: f64, theme: Theme) -> Self {
        let vx = (rng.random::<f64>() - 0.5) * 2.0;
        let vy = (rng.random::<f64>() - 0.5) * 2.0;
        let decay = rng.random::<f64>() * 0.02 + 0.01;
        let size = rng.random::<f64>() * 3.0 + 1.0;
        let alpha = rng.random::<f64>();
        let color = match theme {
            Theme::Dark => format!("rgba(59, 130, 246, {alpha})"),
            Theme::Light => format!("rgba(37, 99, 235, {alpha})"),
        };
        Self {
            x,
            y,
            vx,
            vy,
            life: 1.0,
            decay,
            size,
            color,
        }
    }

    /// Advance one frame. Returns `false` once the particle has faded out.
    pub fn step(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.life -= self.decay;
        self.life > 0.0
    }
}

pub struct ParticleSystem {
    particles: Vec<Particle>,
    mouse: (f64, f64),
    width: f64,
    height: f64,
    resize: Debounce,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            mouse: (0.0, 0.0),
            width: 0.0,
            height: 0.0,
            resize: Debounce::new(RESIZE_DEBOUNCE),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Last pointer position seen
    pub fn mouse(&self) -> (f64, f64) {
        self.mouse
    }

    fn create_canvas(&mut self, cx: &mut Context<'_>) {
        let mut fragment = Fragment::new();
        fragment.push_markup("<canvas class=\"particle-canvas\"></canvas>");
        fragment.declare(Node::ParticleCanvas, &["particle-canvas"]);
        cx.doc.append_fragment(Node::Body, fragment);

        for (property, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", "1"),
            ("opacity", "0.3"),
        ] {
            cx.doc.set_style(Node::ParticleCanvas, property, value);
        }
        self.resize_canvas(cx);
    }

    pub fn resize_canvas(&mut self, cx: &mut Context<'_>) {
        self.resize.fired();
        let viewport = cx.doc.viewport();
        self.width = viewport.width;
        self.height = viewport.height;
        cx.doc
            .set_attribute(Node::ParticleCanvas, "width", &viewport.width.to_string());
        cx.doc
            .set_attribute(Node::ParticleCanvas, "height", &viewport.height.to_string());
    }

    pub fn on_resize(&mut self, cx: &mut Context<'_>) {
        self.resize.call(cx.timers, Task::ResizeCanvas);
    }

    fn has_room(&self, cx: &Context<'_>) -> bool {
        self.particles.len() < cx.config.max_particles
    }

    pub fn on_mouse_move(&mut self, cx: &mut Context<'_>, x: f64, y: f64) {
        self.mouse = (x, y);
        if cx.rng.random::<f64>() > MOUSE_SPAWN_ABOVE && self.has_room(cx) {
            let particle = Particle::spawn(&mut *cx.rng, x, y, cx.state.theme);
            self.particles.push(particle);
        }
    }

    /// Background spawner: one particle at a random spot, up to the cap.
    pub fn spawn_random(&mut self, cx: &mut Context<'_>) {
        if !self.has_room(cx) {
            return;
        }
        let x = cx.rng.random::<f64>() * self.width;
        let y = cx.rng.random::<f64>() * self.height;
        let particle = Particle::spawn(&mut *cx.rng, x, y, cx.state.theme);
        self.particles.push(particle);
        trace!(count = self.particles.len(), "Spawned particle");
    }

    /// Step every particle, drop the dead ones and repaint.
    pub fn frame(&mut self, cx: &mut Context<'_>) {
        self.particles.retain_mut(Particle::step);

        let dots = self
            .particles
            .iter()
            .map(|p| Dot {
                x: p.x,
                y: p.y,
                radius: p.size,
                alpha: p.life,
                color: p.color.clone(),
            })
            .collect();
        cx.doc.paint(
            Node::ParticleCanvas,
            CanvasFrame {
                width: self.width,
                height: self.height,
                dots,
            },
        );
    }
}

impl Module for ParticleSystem {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn init(&mut self, cx: &mut Context<'_>) -> PortfolioResult<()> {
        self.create_canvas(cx);
        cx.timers.schedule_every(FRAME_INTERVAL, Task::AnimationFrame);
        cx.timers.schedule_every(SPAWN_INTERVAL, Task::SpawnParticle);
        Ok(())
    }
}
