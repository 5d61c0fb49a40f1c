//! Home page - the whole valentine in one scroll.

use dioxus::prelude::*;
use sweetheart_core::{ElementState, Modal};

use crate::components::{
    FloatingHearts, Gallery, Memory, QuestionBox, SpecialEnvelope, SuccessModal, TimeTogether,
};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let modal = use_signal(|| {
        let mut state = ElementState::new();
        Modal::hide(&mut state);
        state
    });
    let no_button = use_signal(ElementState::new);

    let memories = vec![
        Memory::new("first-date", "☕", "Our first coffee, and the conversation that never ended"),
        Memory::new("first-trip", "🏖️", "Sunburnt, lost, and happier than ever"),
        Memory::new("movie-night", "🍿", "You cried at the cartoon. I pretended not to"),
        Memory::new("dancing", "💃", "Dancing badly in the kitchen at midnight"),
        Memory::new("stargazing", "🌌", "Counting stars and losing count"),
        Memory::new("forever", "💍", "Every day after this one"),
    ];

    rsx! {
        FloatingHearts {}

        main { class: "page",
            QuestionBox {
                question: "Will you be my Valentine?",
                modal: modal,
                no_button: no_button,
            }

            TimeTogether {}

            Gallery { title: "Our Memories", items: memories }

            SpecialEnvelope {
                message: "You make every ordinary day feel like a celebration. I love you. 💌",
            }
        }

        SuccessModal { state: modal, no_button: no_button }
    }
}
