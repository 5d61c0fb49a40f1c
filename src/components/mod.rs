//! UI Components for Sweetheart.
//!
//! Soft pink valentine aesthetic components.

mod envelope;
mod evasive_button;
mod floating_hearts;
mod gallery;
mod question;
mod success_modal;
mod time_together;

pub use envelope::SpecialEnvelope;
pub use evasive_button::EvasiveButton;
pub use floating_hearts::FloatingHearts;
pub use gallery::{Gallery, Memory};
pub use question::QuestionBox;
pub use success_modal::SuccessModal;
pub use time_together::TimeTogether;
