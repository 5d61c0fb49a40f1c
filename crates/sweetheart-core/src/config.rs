//! Page configuration.
//!
//! Every tunable of the page with its default. A JSON file may override
//! any subset of fields; missing fields keep their defaults.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::celebration::BurstConfig;
use crate::error::{PageError, PageResult};

/// Format accepted for the reference instant (local wall-clock time).
pub const REFERENCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default reference instant.
pub const DEFAULT_REFERENCE: &str = "2025-04-13T00:00:00";

/// Half-open `[min, max)` range of floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Ambient heart emitter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub symbols: Vec<String>,
    pub interval_ms: u64,
    pub lifetime_ms: u64,
    /// Font size in rem
    pub size_rem: Span,
    /// Float animation length in seconds
    pub duration_s: Span,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            symbols: ["❤️", "💖", "💕", "🥰", "🌹", "💋"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            interval_ms: 500,
            lifetime_ms: 15_000,
            size_rem: Span::new(1.0, 2.5),
            duration_s: Span::new(10.0, 15.0),
        }
    }
}

/// Celebration burst settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub opening: BurstConfig,
    pub left: BurstConfig,
    pub right: BurstConfig,
    pub repeat_ms: u64,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            opening: BurstConfig::opening(),
            left: BurstConfig::side(60.0, 0.0),
            right: BurstConfig::side(120.0, 1.0),
            repeat_ms: 3_000,
        }
    }
}

/// Elapsed counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Local wall-clock start, `YYYY-MM-DDTHH:MM:SS`
    pub reference: String,
    pub ramp_ms: u64,
    pub refresh_ms: u64,
    /// Fraction of the section that must be visible to start the ramp
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE.to_string(),
            ramp_ms: 10_000,
            refresh_ms: 1_000,
            visibility_threshold: 0.5,
        }
    }
}

/// Full page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub emitter: EmitterConfig,
    /// Gap kept between the evasive button and each viewport edge, in px
    pub evade_margin_px: f64,
    pub celebration: CelebrationConfig,
    pub counter: CounterConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            emitter: EmitterConfig::default(),
            evade_margin_px: 20.0,
            celebration: CelebrationConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

impl PageConfig {
    /// Read a JSON config file. Fields absent from the file keep defaults.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed reference instant.
    pub fn reference(&self) -> PageResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.counter.reference, REFERENCE_FORMAT)
            .map_err(|e| PageError::InvalidReference(format!("{}: {}", self.counter.reference, e)))
    }

    /// Reject values that would make a component misbehave.
    pub fn validate(&self) -> PageResult<()> {
        let emitter = &self.emitter;
        if emitter.symbols.is_empty() {
            return Err(PageError::Config("emitter.symbols is empty".to_string()));
        }
        if emitter.interval_ms == 0 {
            return Err(PageError::Config("emitter.interval_ms must be positive".to_string()));
        }
        for (name, span) in [("size_rem", emitter.size_rem), ("duration_s", emitter.duration_s)] {
            if !(span.min < span.max) {
                return Err(PageError::Config(format!(
                    "emitter.{} range is empty: [{}, {})",
                    name, span.min, span.max
                )));
            }
        }
        if self.evade_margin_px < 0.0 {
            return Err(PageError::Config("evade_margin_px must not be negative".to_string()));
        }
        if self.counter.refresh_ms == 0 || self.counter.ramp_ms == 0 {
            return Err(PageError::Config(
                "counter.ramp_ms and counter.refresh_ms must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.counter.visibility_threshold) {
            return Err(PageError::Config(
                "counter.visibility_threshold must be within [0, 1]".to_string(),
            ));
        }
        self.reference()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = PageConfig::default();
        config.validate().unwrap();
        assert_eq!(config.evade_margin_px, 20.0);
        assert_eq!(config.emitter.symbols.len(), 6);
        assert_eq!(config.celebration.repeat_ms, 3_000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PageConfig::from_json(
            r#"{ "counter": { "reference": "2024-01-01T12:00:00" } }"#,
        )
        .unwrap();

        assert_eq!(config.counter.reference, "2024-01-01T12:00:00");
        assert_eq!(config.counter.ramp_ms, 10_000);
        assert_eq!(config.evade_margin_px, 20.0);
        assert_eq!(config.emitter, EmitterConfig::default());
    }

    #[test]
    fn test_empty_symbols_rejected() {
        let result = PageConfig::from_json(r#"{ "emitter": { "symbols": [] } }"#);
        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result =
            PageConfig::from_json(r#"{ "emitter": { "size_rem": { "min": 3.0, "max": 1.0 } } }"#);
        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[test]
    fn test_bad_reference_rejected() {
        let result = PageConfig::from_json(r#"{ "counter": { "reference": "April 13th" } }"#);
        assert!(matches!(result, Err(PageError::InvalidReference(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "evade_margin_px": 8 }}"#).unwrap();

        let config = PageConfig::load(file.path()).unwrap();
        assert_eq!(config.evade_margin_px, 8.0);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = PageConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(PageError::Io(_))));
    }
}
