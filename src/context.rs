//! Page-session context provider.
//!
//! Provides the [`PageSession`] and the page clock to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut session = use_session();
//! let clock = use_page_clock();
//! ```

use std::time::Instant;

use dioxus::prelude::*;
use sweetheart_core::{PageConfig, PageSession, ReferenceInstant};

/// Get the startup session built from the command line.
///
/// Without one, the page runs on defaults and counts from launch.
pub fn startup_session() -> PageSession {
    crate::initial_session().unwrap_or_else(|| {
        tracing::warn!("No startup session, counting from now");
        let now = chrono::Local::now().fixed_offset();
        PageSession::with_reference(PageConfig::default(), ReferenceInstant::new(now))
    })
}

/// Monotonic clock for frame timestamps and decoration lifetimes.
///
/// Zero is the moment the page was mounted, like a browser's
/// `performance.now()`.
#[derive(Clone, Copy, Debug)]
pub struct PageClock {
    started: Instant,
}

impl Default for PageClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PageClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds since page start, fractional.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Whole milliseconds since page start.
    pub fn now_ms_u64(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

/// Wall-clock now as Unix epoch milliseconds.
pub fn wall_clock_ms() -> i64 {
    chrono::Local::now().timestamp_millis()
}

/// Hook to access the page session from context.
///
/// Holds the reveal flag, the counter phase and the emitter sequence.
pub fn use_session() -> Signal<PageSession> {
    use_context::<Signal<PageSession>>()
}

/// Hook to access the page clock.
pub fn use_page_clock() -> PageClock {
    use_context::<PageClock>()
}
