use std::time::Duration;

use crate::controllers::{px, Context};
use crate::ports::{Node, Selector};
use crate::timing::Throttle;

const MOUSE_THROTTLE: Duration = Duration::from_millis(50);
const SPEED_STEP: f64 = 0.02;

/// Floating shapes drift with the pointer, deeper layers further.
#[derive(Debug)]
pub struct MouseParallax {
    shapes: Vec<Node>,
    throttle: Throttle,
}

impl Default for MouseParallax {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseParallax {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            throttle: Throttle::new(MOUSE_THROTTLE),
        }
    }

    pub fn init(&mut self, cx: &mut Context<'_>) {
        self.shapes = cx.doc.query(Node::Root, Selector::Class("floating-shape"));
    }

    /// Offset of shape `index` for a pointer at the given viewport fractions.
    pub fn offset(index: usize, fx: f64, fy: f64) -> (f64, f64) {
        let speed = (index + 1) as f64 * SPEED_STEP;
        ((fx - 0.5) * speed * 100.0, (fy - 0.5) * speed * 100.0)
    }

    pub fn on_mouse_move(&mut self, cx: &mut Context<'_>, x: f64, y: f64) {
        if self.shapes.is_empty() || !self.throttle.try_fire(cx.now()) {
            return;
        }
        let viewport = cx.doc.viewport();
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        let (fx, fy) = (x / viewport.width, y / viewport.height);

        for (index, shape) in self.shapes.iter().enumerate() {
            let (dx, dy) = Self::offset(index, fx, fy);
            cx.doc
                .set_style(*shape, "transform", &format!("translate({}, {})", px(dx), px(dy)));
        }
    }
}
