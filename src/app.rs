use std::time::Instant;

use dioxus::prelude::*;
use portfolio_core::effects::FRAME_INTERVAL;

use crate::bridge::{self, BridgeMessage, BRIDGE_JS};
use crate::context::{advance, build_portfolio, dispatch, Portfolio};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the portfolio app, drives its clock once per frame and feeds it the
/// webview's scroll, layout, key and print events.
#[component]
pub fn App() -> Element {
    let app: Signal<Portfolio> = use_signal(build_portfolio);
    use_context_provider(|| app);

    // Clock: advance by wall time elapsed since the previous frame
    use_future(move || async move {
        let mut last = Instant::now();
        loop {
            tokio::time::sleep(FRAME_INTERVAL).await;
            let now = Instant::now();
            advance(app, now - last);
            last = now;
        }
    });

    // Webview events
    use_future(move || async move {
        let mut app = app;
        let mut eval = document::eval(BRIDGE_JS);
        loop {
            match eval.recv::<BridgeMessage>().await {
                Ok(message) => {
                    let event = bridge::apply(app.write().document_mut(), message);
                    dispatch(app, event);
                }
                Err(e) => {
                    tracing::error!("Webview bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
