//! Toggle and reveal widgets: gallery flip cards, the one-shot envelope,
//! and the success modal.

use crate::render::RenderTarget;

pub const FLIPPED: &str = "flipped";
pub const OPEN: &str = "open";

/// Flip a gallery card. Returns whether it now shows its back.
pub fn flip_card<T: RenderTarget>(card: &mut T) -> bool {
    card.toggle_class(FLIPPED)
}

/// What an envelope click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeClick {
    /// First click: the envelope opened and the page should celebrate.
    Opened,
    /// Already open; nothing changed.
    AlreadyOpen,
}

/// One-shot envelope.
///
/// The reveal flag starts false and becomes true on the first outer click.
/// It never goes back.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    revealed: bool,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Outer envelope clicked.
    ///
    /// On the first call: marks the envelope `open` and fades the
    /// instruction label (if the page has one).
    pub fn open<E, L>(&mut self, envelope: &mut E, instruction: Option<&mut L>) -> EnvelopeClick
    where
        E: RenderTarget,
        L: RenderTarget,
    {
        if self.revealed {
            return EnvelopeClick::AlreadyOpen;
        }

        self.revealed = true;
        envelope.add_class(OPEN);
        if let Some(label) = instruction {
            label.set_style("opacity", "0");
        }
        tracing::info!("Envelope opened");
        EnvelopeClick::Opened
    }

    /// Inner card clicked. The caller stops the click from reaching the
    /// outer envelope.
    ///
    /// Flips only after the envelope is open. Returns whether the card
    /// changed.
    pub fn flip_inner<C: RenderTarget>(&self, card: &mut C) -> bool {
        if !self.revealed {
            return false;
        }
        card.toggle_class(FLIPPED);
        true
    }
}

/// Success modal shown after a "yes".
pub struct Modal;

impl Modal {
    pub fn show<M: RenderTarget>(modal: &mut M) {
        modal.set_style("display", "flex");
    }

    pub fn hide<M: RenderTarget>(modal: &mut M) {
        modal.set_style("display", "none");
    }

    pub fn is_visible<M: RenderTarget>(modal: &M) -> bool {
        modal.style("display").as_deref() == Some("flex")
    }

    /// A click reached the backdrop. The modal content stops propagation of
    /// its own clicks, so only clicks on the overlay itself arrive here.
    ///
    /// Returns whether the modal was open and is now hidden.
    pub fn backdrop_click<M: RenderTarget>(modal: &mut M) -> bool {
        if Self::is_visible(modal) {
            Self::hide(modal);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ElementState;

    #[test]
    fn test_gallery_double_click_restores() {
        let mut card = ElementState::new().with_class("gallery-item");
        assert!(flip_card(&mut card));
        assert!(!flip_card(&mut card));
        assert!(!card.has_class(FLIPPED));
        assert!(card.has_class("gallery-item"));
    }

    #[test]
    fn test_envelope_opens_once() {
        let mut envelope = Envelope::new();
        let mut outer = ElementState::new();
        let mut label = ElementState::with_text("Click to open");

        assert_eq!(envelope.open(&mut outer, Some(&mut label)), EnvelopeClick::Opened);
        assert!(outer.has_class(OPEN));
        assert_eq!(label.style("opacity").as_deref(), Some("0"));

        for _ in 0..5 {
            assert_eq!(envelope.open(&mut outer, Some(&mut label)), EnvelopeClick::AlreadyOpen);
        }
        assert!(envelope.is_revealed());
    }

    #[test]
    fn test_envelope_without_label() {
        let mut envelope = Envelope::new();
        let mut outer = ElementState::new();
        let result = envelope.open(&mut outer, None::<&mut ElementState>);
        assert_eq!(result, EnvelopeClick::Opened);
    }

    #[test]
    fn test_inner_card_locked_until_open() {
        let mut envelope = Envelope::new();
        let mut outer = ElementState::new();
        let mut inner = ElementState::new();

        assert!(!envelope.flip_inner(&mut inner));
        assert!(!inner.has_class(FLIPPED));

        envelope.open(&mut outer, None::<&mut ElementState>);
        assert!(envelope.flip_inner(&mut inner));
        assert!(inner.has_class(FLIPPED));
        assert!(envelope.flip_inner(&mut inner));
        assert!(!inner.has_class(FLIPPED));
    }

    #[test]
    fn test_backdrop_click_hides_open_modal_once() {
        let mut modal = ElementState::new();
        Modal::show(&mut modal);

        assert!(Modal::backdrop_click(&mut modal));
        assert_eq!(modal.style("display").as_deref(), Some("none"));

        // Already hidden: nothing to dismiss
        assert!(!Modal::backdrop_click(&mut modal));
        assert!(!Modal::is_visible(&modal));
    }
}
