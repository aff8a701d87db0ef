use std::fmt::Write as _;
use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::app::Task;
use crate::controllers::Context;
use crate::markup::escape;
use crate::ports::{Document, Fragment, Node};
use crate::types::Theme;

/// Glyphs a column is drawn from
pub const MATRIX_CHARS: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789@#$%^&*()_+-=[]{}|;:,.<>?";

const SPAWN_INTERVAL: Duration = Duration::from_millis(200);
const SPAWN_CHANCE_ABOVE: f64 = 0.7;
const COLUMN_LIFETIME: Duration = Duration::from_millis(5000);

/// Falling glyph columns, visible in the dark theme only.
#[derive(Debug)]
pub struct MatrixRain {
    glyphs: Vec<char>,
    next_column: u64,
    active: bool,
}

impl Default for MatrixRain {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixRain {
    pub fn new() -> Self {
        Self {
            glyphs: MATRIX_CHARS.chars().collect(),
            next_column: 0,
            active: false,
        }
    }

    pub fn init(&mut self, cx: &mut Context<'_>) {
        if !cx.doc.contains(Node::MatrixRain) {
            return;
        }
        self.active = true;
        cx.timers.schedule_every(SPAWN_INTERVAL, Task::MatrixTick);
    }

    pub fn tick(&mut self, cx: &mut Context<'_>) {
        if self.active && cx.state.theme.is_dark() && cx.rng.random::<f64>() > SPAWN_CHANCE_ABOVE {
            self.spawn_column(cx);
        }
    }

    fn spawn_column(&mut self, cx: &mut Context<'_>) {
        let id = self.next_column;
        self.next_column += 1;
        let node = Node::MatrixColumn(id);

        let left = cx.rng.random::<f64>() * 100.0;
        let duration = cx.rng.random::<f64>() * 3.0 + 2.0;
        let delay = cx.rng.random::<f64>() * 2.0;
        let count = cx.rng.random_range(10..30);

        let mut text = String::new();
        for _ in 0..count {
            let glyph = self.glyphs[cx.rng.random_range(0..self.glyphs.len())];
            let _ = write!(text, "{}<br>", escape(glyph.encode_utf8(&mut [0; 4])));
        }

        let left = format!("{left}%");
        let duration = format!("{duration}s");
        let delay = format!("{delay}s");

        let mut fragment = Fragment::new();
        let _ = write!(
            fragment.markup,
            "<div class=\"matrix-column\" style=\"left: {left}; animation-duration: {duration}; animation-delay: {delay};\">{text}</div>"
        );
        fragment.declare(node, &["matrix-column"]);
        cx.doc.append_fragment(Node::MatrixRain, fragment);
        cx.doc.set_style(node, "left", &left);
        cx.doc.set_style(node, "animation-duration", &duration);
        cx.doc.set_style(node, "animation-delay", &delay);

        trace!(id, count, "Spawned matrix column");
        cx.timers
            .schedule_after(COLUMN_LIFETIME, Task::ExpireMatrixColumn(id));
    }

    pub fn expire(&mut self, cx: &mut Context<'_>, id: u64) {
        cx.doc.remove_node(Node::MatrixColumn(id));
    }

    /// Rain is faintly visible in the dark theme and hidden otherwise.
    pub fn on_theme_changed(&mut self, doc: &mut dyn Document, theme: Theme) {
        let opacity = if theme.is_dark() { "0.05" } else { "0" };
        doc.set_style(Node::MatrixRain, "opacity", opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::Harness;

    fn run_ticks(h: &mut Harness, rain: &mut MatrixRain, ticks: usize) {
        for _ in 0..ticks {
            rain.tick(&mut h.cx());
        }
    }

    #[test]
    fn light_theme_never_spawns() {
        let mut h = Harness::new();
        let mut rain = MatrixRain::new();
        rain.init(&mut h.cx());
        run_ticks(&mut h, &mut rain, 200);
        assert!(h.doc.children(Node::MatrixRain).is_empty());
    }

    #[test]
    fn dark_theme_spawns_columns_that_expire() {
        let mut h = Harness::new();
        h.state.theme = Theme::Dark;
        let mut rain = MatrixRain::new();
        rain.init(&mut h.cx());
        run_ticks(&mut h, &mut rain, 200);

        let columns = h.doc.children(Node::MatrixRain);
        assert!(!columns.is_empty());
        let left = h.doc.style(columns[0], "left").unwrap();
        let pct: f64 = left.trim_end_matches('%').parse().unwrap();
        assert!((0.0..100.0).contains(&pct));

        for task in h.due(COLUMN_LIFETIME) {
            if let Task::ExpireMatrixColumn(id) = task {
                rain.expire(&mut h.cx(), id);
            }
        }
        assert!(h.doc.children(Node::MatrixRain).is_empty());
        assert_eq!(h.doc.markup(Node::MatrixRain), Some(""));
    }

    #[test]
    fn missing_container_disables_rain() {
        let mut h = Harness::new();
        h.doc.remove(Node::MatrixRain);
        let mut rain = MatrixRain::new();
        rain.init(&mut h.cx());
        assert_eq!(h.timers.pending_timers(), 0);
    }

    #[test]
    fn opacity_follows_theme() {
        let mut h = Harness::new();
        let mut rain = MatrixRain::new();
        rain.on_theme_changed(&mut h.doc, Theme::Dark);
        assert_eq!(h.doc.style(Node::MatrixRain, "opacity"), Some("0.05"));
        rain.on_theme_changed(&mut h.doc, Theme::Light);
        assert_eq!(h.doc.style(Node::MatrixRain, "opacity"), Some("0"));
    }
}
