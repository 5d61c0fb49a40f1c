//! Special Envelope Component
//!
//! Opens once with a celebration. The card inside can then be flipped back
//! and forth; before the envelope opens it does not move.

use dioxus::prelude::*;
use sweetheart_core::{ElementState, EnvelopeClick};

use crate::bridge::{celebrate, SignalTarget};
use crate::context::{use_page_clock, use_session};

/// The click-to-reveal envelope
#[component]
pub fn SpecialEnvelope(
    /// Message on the back of the inner card
    message: String,
) -> Element {
    let mut session = use_session();
    let clock = use_page_clock();
    let envelope = use_signal(ElementState::new);
    let instruction = use_signal(ElementState::new);
    let card = use_signal(ElementState::new);

    let open = move |_| {
        let click = session
            .write()
            .envelope_mut()
            .open(&mut SignalTarget(envelope), Some(&mut SignalTarget(instruction)));

        if click == EnvelopeClick::Opened {
            celebrate(session, clock);
        }
    };

    let flip = move |e: Event<MouseData>| {
        // The envelope must not see clicks meant for the card
        e.stop_propagation();
        let flipped = session.peek().envelope().flip_inner(&mut SignalTarget(card));
        if !flipped {
            tracing::debug!("Inner card clicked before envelope opened");
        }
    };

    let instruction_style = instruction.read().style_attr();
    let envelope_class = envelope.read().class_attr("envelope");
    let card_class = card.read().class_attr("card-content");

    rsx! {
        section { class: "envelope-section",
            p {
                class: "click-instruction",
                style: "{instruction_style}",
                "Tap the envelope 💌"
            }

            div {
                id: "specialEnvelope",
                class: "{envelope_class}",
                onclick: open,

                div { class: "envelope-flap" }
                div { class: "envelope-body" }

                div {
                    class: "{card_class}",
                    onclick: flip,

                    div { class: "card-front",
                        h3 { "For You" }
                        p { "Tap to flip" }
                    }
                    div { class: "card-back",
                        p { class: "card-message", "{message}" }
                    }
                }
            }
        }
    }
}
