//! Console logging setup.
//!
//! The page logs through `tracing`; this module owns the subscriber
//! configuration so the binary and tests build it the same way.
//!
//! ```ignore
//! use sweetheart_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new().with_filter("sweetheart=debug").init()?;
//! ```

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::error::{PageError, PageResult};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info";

/// Builder for the console subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    show_target: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    /// Create a new logging builder.
    pub fn new() -> Self {
        Self {
            env_filter: None,
            show_target: true,
        }
    }

    /// Set the filter directive (e.g., "sweetheart=info,sweetheart_core=debug").
    ///
    /// Takes precedence over `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Hide the module path in each line.
    pub fn without_target(mut self) -> Self {
        self.show_target = false;
        self
    }

    fn filter(&self) -> PageResult<EnvFilter> {
        match &self.env_filter {
            Some(directive) => EnvFilter::try_new(directive)
                .map_err(|e| PageError::Config(format!("invalid log filter '{}': {}", directive, e))),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Build the subscriber without installing it.
    pub fn build(&self) -> PageResult<impl Subscriber + Send + Sync> {
        let filter = self.filter()?;
        Ok(tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(self.show_target)
            .finish())
    }

    /// Install the subscriber as the global default.
    pub fn init(self) -> PageResult<()> {
        let subscriber = self.build()?;
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| PageError::Config(format!("logging already initialized: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let result = LoggingBuilder::new().with_filter("sweetheart=notalevel").build();
        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[test]
    fn test_subscriber_usable_as_default() {
        let subscriber = LoggingBuilder::new()
            .with_filter("debug")
            .without_target()
            .build()
            .unwrap();

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(count = 3, "scoped subscriber active");
        });
    }
}
