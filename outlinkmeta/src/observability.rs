//! Logging setup.
//!
//! The filters only emit `tracing` events. Hosts that do not install their
//! own subscriber can call [`init_logging`].

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for this crate.
    #[serde(default = "default_level")]
    pub default_level: String,
    /// Extra `target=level` directives.
    #[serde(default)]
    pub directives: Vec<String>,
    /// Emit JSON lines instead of text.
    #[serde(default)]
    pub json: bool,
    /// Include the event target.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            directives: Vec::new(),
            json: false,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Sets the level for this crate.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Adds a directive.
    #[must_use]
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Switches JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Builds the filter string for a configuration.
#[must_use]
pub fn build_filter_string(config: &LoggingConfig) -> String {
    let mut filter = format!("warn,outlinkmeta={}", config.default_level);
    for directive in &config.directives {
        filter.push(',');
        filter.push_str(directive);
    }
    filter
}

/// Installs a global subscriber. `RUST_LOG` takes precedence over the
/// configuration.
///
/// Returns false if a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(build_filter_string(config)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.include_target);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.default_level, json = config.json, "Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_string() {
        let config = LoggingConfig::default()
            .with_level("debug")
            .with_directive("hyper=off");

        assert_eq!(build_filter_string(&config), "warn,outlinkmeta=debug,hyper=off");
    }

    #[test]
    fn test_second_init_is_noop() {
        init_logging(&LoggingConfig::default());
        assert!(!init_logging(&LoggingConfig::default().with_json(true)));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggingConfig::default());
    }
}
