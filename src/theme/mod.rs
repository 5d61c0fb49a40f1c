//! Theme for Sweetheart: global styles and third-party scripts.

mod styles;

pub use styles::GLOBAL_STYLES;

/// canvas-confetti browser build, provides the global `confetti()` function
pub const CONFETTI_SRC: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";
