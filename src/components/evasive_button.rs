//! The "No" button that will not be pressed.

use std::rc::Rc;

use dioxus::prelude::*;
use sweetheart_core::ElementState;

use crate::bridge::{measure, viewport, SignalTarget};
use crate::context::use_session;

/// "No" button that jumps away on hover or touch.
///
/// `state` is shared with the success modal, which puts the button back
/// into normal flow when closed.
#[component]
pub fn EvasiveButton(
    /// Inline style and layout of the button
    state: Signal<ElementState>,
    /// Button label
    #[props(default = "No".to_string())]
    label: String,
) -> Element {
    let session = use_session();
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let evade = move || {
        spawn(async move {
            let Some(element) = mounted() else {
                tracing::warn!("Evasive button moved before it was mounted");
                return;
            };

            let result = async {
                measure(&element, state).await?;
                let viewport = viewport().await?;
                let evader = session.peek().evader();
                evader.evade(&mut SignalTarget(state), viewport, &mut rand::rng())
            }
            .await;

            if let Err(e) = result {
                tracing::warn!("Evasive button could not move: {}", e);
            }
        });
    };

    let style = state.read().style_attr();

    rsx! {
        button {
            id: "noBtn",
            class: "btn btn-no",
            style: "{style}",
            onmounted: move |e| mounted.set(Some(e.data())),
            onmouseover: move |_| evade(),
            ontouchstart: move |e| {
                // Keep the touch from turning into a click
                e.prevent_default();
                evade();
            },
            "{label}"
        }
    }
}
