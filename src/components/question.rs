//! Question Box Component
//!
//! The big question with its two answers.

use dioxus::prelude::*;
use sweetheart_core::{ElementState, Modal};

use super::EvasiveButton;
use crate::bridge::{celebrate, SignalTarget};
use crate::context::{use_page_clock, use_session};

/// Question with "Yes" and the runaway "No"
#[component]
pub fn QuestionBox(
    question: String,
    /// Success modal state, shown on "Yes"
    modal: Signal<ElementState>,
    /// Evasive "No" button state
    no_button: Signal<ElementState>,
) -> Element {
    let session = use_session();
    let clock = use_page_clock();

    let say_yes = move |_| {
        celebrate(session, clock);
        Modal::show(&mut SignalTarget(modal));
    };

    rsx! {
        div { class: "question-box",
            div { class: "question-emoji", "🥺👉👈" }
            h1 { class: "page-title", "{question}" }

            div { class: "buttons",
                button {
                    id: "yesBtn",
                    class: "btn btn-yes",
                    onclick: say_yes,
                    "Yes"
                }
                EvasiveButton { state: no_button }
            }
        }
    }
}
