use std::time::Duration;

use rand::Rng;

use super::GlitchChannel;
use crate::app::Task;
use crate::controllers::{px, Context};
use crate::markup::escape;
use crate::ports::{Fragment, Node, Selector};

const TICK: Duration = Duration::from_millis(200);
const TRIGGER_ABOVE: f64 = 0.95;
const RESET_AFTER: Duration = Duration::from_millis(100);
const JITTER_PX: f64 = 2.0;
const REST: &str = "translate(0, 0)";

/// Red/cyan offset copies behind each `data-text` heading.
#[derive(Debug, Default)]
pub struct GlitchText {
    elements: Vec<usize>,
}

impl GlitchText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, cx: &mut Context<'_>) {
        for node in cx.doc.query(Node::Root, Selector::Attribute("data-text")) {
            let Node::GlitchText(index) = node else {
                continue;
            };
            let text = cx.doc.attribute(node, "data-text").unwrap_or_default();
            cx.doc.set_style(node, "position", "relative");

            let mut fragment = Fragment::new();
            for channel in GlitchChannel::ALL {
                fragment.push_markup(&format!(
                    "<span class=\"{class}\" style=\"position: absolute; top: 0; left: 0; color: {color}; z-index: -1;\">{text}</span>",
                    class = channel.class(),
                    color = channel.color(),
                    text = escape(&text),
                ));
                fragment.declare(Node::GlitchLayer(index, channel), &[channel.class()]);
            }
            cx.doc.append_fragment(node, fragment);

            for channel in GlitchChannel::ALL {
                let layer = Node::GlitchLayer(index, channel);
                cx.doc.set_text(layer, &text);
                cx.doc.set_style(layer, "position", "absolute");
                cx.doc.set_style(layer, "top", "0");
                cx.doc.set_style(layer, "left", "0");
                cx.doc.set_style(layer, "color", channel.color());
                cx.doc.set_style(layer, "z-index", "-1");
            }

            cx.timers.schedule_every(TICK, Task::GlitchTick(index));
            self.elements.push(index);
        }
    }

    pub fn layer_count(&self) -> usize {
        self.elements.len() * GlitchChannel::ALL.len()
    }

    pub fn tick(&mut self, cx: &mut Context<'_>, index: usize) {
        if cx.rng.random::<f64>() <= TRIGGER_ABOVE {
            return;
        }
        for channel in GlitchChannel::ALL {
            let dx = cx.rng.random::<f64>() * JITTER_PX * 2.0 - JITTER_PX;
            let dy = cx.rng.random::<f64>() * JITTER_PX * 2.0 - JITTER_PX;
            cx.doc.set_style(
                Node::GlitchLayer(index, channel),
                "transform",
                &format!("translate({}, {})", px(dx), px(dy)),
            );
        }
        cx.timers
            .schedule_after(RESET_AFTER, Task::ResetGlitch(index));
    }

    pub fn reset(&mut self, cx: &mut Context<'_>, index: usize) {
        for channel in GlitchChannel::ALL {
            cx.doc
                .set_style(Node::GlitchLayer(index, channel), "transform", REST);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::Harness;
    use crate::ports::Document;

    #[test]
    fn init_adds_two_layers_per_heading() {
        let mut h = Harness::new();
        let mut glitch = GlitchText::new();
        glitch.init(&mut h.cx());

        assert_eq!(glitch.layer_count(), 2);
        let red = Node::GlitchLayer(0, GlitchChannel::Red);
        assert!(h.doc.contains(red));
        assert_eq!(h.doc.style(red, "color"), Some("rgba(255, 0, 0, 0.3)"));
        assert_eq!(h.doc.text(red), Some("Poovarasu"));
        assert_eq!(h.doc.style(Node::GlitchText(0), "position"), Some("relative"));
        assert_eq!(h.timers.pending_timers(), 1);
    }

    #[test]
    fn triggered_glitch_resets() {
        let mut h = Harness::new();
        let mut glitch = GlitchText::new();
        glitch.init(&mut h.cx());

        // ~5% trigger rate; 400 ticks practically always fire at least once
        let mut fired = false;
        for _ in 0..400 {
            glitch.tick(&mut h.cx(), 0);
            if h.timers.pending_timers() > 1 {
                fired = true;
                break;
            }
        }
        assert!(fired);
        let blue = Node::GlitchLayer(0, GlitchChannel::Blue);
        let jitter = h.doc.style(blue, "transform").unwrap().to_string();
        assert!(jitter.starts_with("translate("));

        glitch.reset(&mut h.cx(), 0);
        assert_eq!(h.doc.style(blue, "transform"), Some(REST));
    }
}
