//! Flip-card Gallery Component
//!
//! Each card flips on click to show its caption, and flips back on the
//! next click.

use dioxus::prelude::*;
use sweetheart_core::{flip_card, ElementState};

use crate::bridge::SignalTarget;

/// Gallery card data
#[derive(Clone, PartialEq)]
pub struct Memory {
    pub id: String,
    /// Emoji or image URL shown on the front
    pub front: String,
    pub caption: String,
}

impl Memory {
    pub fn new(id: &str, front: &str, caption: &str) -> Self {
        Self {
            id: id.to_string(),
            front: front.to_string(),
            caption: caption.to_string(),
        }
    }

    fn is_image(&self) -> bool {
        self.front.starts_with("http") || self.front.starts_with("data:") || self.front.contains('/')
    }
}

/// Grid of flip cards
///
/// # Examples
///
/// ```rust
/// rsx! {
///     Gallery {
///         title: "Our Memories",
///         items: vec![Memory::new("first-date", "☕", "Our first coffee")],
///     }
/// }
/// ```
#[component]
pub fn Gallery(
    /// Gallery section title
    title: String,
    /// Cards to display
    items: Vec<Memory>,
) -> Element {
    if items.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-title", "{title}" }
            div { class: "gallery",
                for item in items.iter() {
                    GalleryCard { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}

/// A single card with its own flip state.
#[component]
fn GalleryCard(item: Memory) -> Element {
    let state = use_signal(ElementState::new);
    let class = state.read().class_attr("gallery-item");

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                let flipped = flip_card(&mut SignalTarget(state));
                tracing::debug!(flipped, "Gallery card toggled");
            },

            div { class: "gallery-inner",
                div { class: "gallery-front",
                    if item.is_image() {
                        img { src: "{item.front}", alt: "{item.caption}", class: "gallery-img" }
                    } else {
                        span { class: "gallery-emoji", "{item.front}" }
                    }
                }
                div { class: "gallery-back",
                    p { class: "gallery-caption", "{item.caption}" }
                }
            }
        }
    }
}
