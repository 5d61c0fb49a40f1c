//! Success Modal Component
//!
//! Shown after a "yes". Closes via its close control or a click on the
//! backdrop.

use dioxus::prelude::*;
use sweetheart_core::{ElementState, Modal};

use crate::bridge::SignalTarget;
use crate::context::use_session;

/// Success modal overlay
///
/// # Example
///
/// ```rust
/// rsx! {
///     SuccessModal {
///         state: modal,
///         no_button: no_button,
///     }
/// }
/// ```
#[component]
pub fn SuccessModal(
    /// Display state of the overlay
    state: Signal<ElementState>,
    /// The evasive button, reset to normal flow on close
    no_button: Signal<ElementState>,
) -> Element {
    let session = use_session();

    let close = move |_| {
        Modal::hide(&mut SignalTarget(state));
        session.peek().evader().reset(&mut SignalTarget(no_button));
    };

    let style = state.read().style_attr();

    rsx! {
        div {
            id: "successModal",
            class: "modal-overlay",
            style: "{style}",
            // Content clicks stop below, so only backdrop clicks reach here
            onclick: move |_| {
                if Modal::backdrop_click(&mut SignalTarget(state)) {
                    tracing::debug!("Success modal dismissed from backdrop");
                }
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                span { class: "close-modal", onclick: close, "×" }

                h2 { class: "modal-title", "Yay! 💖" }
                p { class: "modal-description",
                    "I knew you'd say yes. Best. Day. Ever."
                }
                div { class: "modal-hearts", "💕 💖 💕" }
            }
        }
    }
}
