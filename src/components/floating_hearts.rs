//! Floating Hearts Background
//!
//! Spawns a heart every emitter tick; each one floats up and is removed on
//! the first tick at or after its lifetime.

use std::time::Duration;

use dioxus::prelude::*;
use sweetheart_core::{Decoration, DecorationLayer};

use crate::context::{use_page_clock, use_session};

/// Background layer of rising hearts.
///
/// Runs for the whole page session.
#[component]
pub fn FloatingHearts() -> Element {
    let mut session = use_session();
    let clock = use_page_clock();
    let mut layer: Signal<DecorationLayer> = use_signal(DecorationLayer::new);

    use_effect(move || {
        spawn(async move {
            let interval_ms = session.peek().emitter().interval_ms();
            let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));

            loop {
                ticker.tick().await;

                // Expired hearts leave on the same tick a new one arrives
                let reaped = session.write().emitter_mut().tick(
                    &mut layer.write(),
                    &mut rand::rng(),
                    clock.now_ms_u64(),
                );
                if reaped > 0 {
                    tracing::trace!(reaped, "Floating hearts expired");
                }
            }
        });
    });

    let hearts: Vec<Decoration> = layer.read().iter().cloned().collect();

    rsx! {
        div { id: "floatingHearts", class: "floating-hearts",
            for heart in hearts.iter() {
                div {
                    key: "{heart.id}",
                    class: "heart",
                    style: heart.style_attr(),
                    "{heart.symbol}"
                }
            }
        }
    }
}
