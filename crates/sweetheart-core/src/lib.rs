//! Sweetheart Core Library
//!
//! Behavior behind the Sweetheart page, kept free of any display surface.
//!
//! ## Overview
//!
//! The page is a handful of independent widgets:
//!
//! - **Floating hearts**: [`AmbientEmitter`] spawns a decoration every tick,
//!   each removed after a fixed lifetime
//! - **Evasive button**: [`Evader`] relocates the "no" button inside the viewport
//! - **Celebration**: [`Celebration`] fires confetti through a [`BurstSink`]
//! - **Time together**: [`ElapsedCounter`] eases in, then ticks every second
//! - **Reveals**: gallery flip cards and the one-shot [`Envelope`]
//!
//! Widgets touch the page only through [`RenderTarget`], and frame-driven
//! work is expressed as [`FrameStep`] tasks the host ticks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sweetheart_core::{ElementState, PageConfig, PageSession};
//!
//! let mut session = PageSession::new(PageConfig::default())?;
//! let mut envelope = ElementState::new();
//! session.envelope_mut().open(&mut envelope, None::<&mut ElementState>);
//! ```

pub mod celebration;
pub mod config;
pub mod elapsed;
pub mod emitter;
pub mod error;
pub mod evasive;
pub mod logging;
pub mod render;
pub mod reveal;
pub mod session;
pub mod task;

// Re-exports
pub use celebration::{BurstConfig, BurstSink, Celebration, Origin};
pub use config::{CelebrationConfig, CounterConfig, EmitterConfig, PageConfig, Span};
pub use elapsed::{
    ease_out_expo, CounterPhase, ElapsedCounter, ElapsedReading, RampTask, ReferenceInstant,
};
pub use emitter::{AmbientEmitter, Decoration, DecorationLayer};
pub use error::{PageError, PageResult};
pub use evasive::{choose_placement, Evader, Placement};
pub use render::{ElementState, Rect, RenderTarget, Viewport};
pub use reveal::{flip_card, Envelope, EnvelopeClick, Modal};
pub use session::PageSession;
pub use task::{FrameStep, FrameTask};
