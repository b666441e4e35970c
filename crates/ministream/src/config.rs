//! Configuration types for the Ministream topology view.
//!
//! This module provides configuration structures that control how snapshots
//! are acquired and how the topology is styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining poll and style settings.
//! - [`PollConfig`] - Controls the snapshot polling cadence.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use ministream::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.poll().interval().as_secs(), 5);
//! ```

use std::time::Duration;

use serde::Deserialize;

use ministream_core::color::Color;

/// Top-level application configuration combining poll and style settings.
///
/// Groups [`PollConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Poll configuration section.
    #[serde(default)]
    poll: PollConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified poll and style configurations.
    ///
    /// # Arguments
    ///
    /// * `poll` - Snapshot polling settings.
    /// * `style` - Visual styling options.
    pub fn new(poll: PollConfig, style: StyleConfig) -> Self {
        Self { poll, style }
    }

    /// Returns the poll configuration.
    pub fn poll(&self) -> &PollConfig {
        &self.poll
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Snapshot polling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds between snapshot fetches.
    #[serde(default = "default_interval_secs")]
    interval_secs: u64,
}

impl PollConfig {
    /// Creates a new [`PollConfig`] with the given cadence.
    pub fn new(interval_secs: u64) -> Self {
        Self { interval_secs }
    }

    /// Returns the interval between snapshot fetches.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// The original front end refreshed every 5 seconds.
fn default_interval_secs() -> u64 {
    5
}

/// Visual styling configuration for the rendered topology.
///
/// Controls appearance options such as background color. Fields that are
/// not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for the topology, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval() {
        let config = AppConfig::default();
        assert_eq!(config.poll().interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_background_is_none() {
        let config = AppConfig::default();
        assert_eq!(config.style().background_color().unwrap(), None);
    }

    #[test]
    fn test_custom_poll_interval() {
        let config = AppConfig::new(PollConfig::new(30), StyleConfig::default());
        assert_eq!(config.poll().interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_background_color_parses() {
        let style = StyleConfig::new(Some("#f8fafc".to_string()));
        assert!(style.background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color_reports_error() {
        let style = StyleConfig::new(Some("not-a-color".to_string()));
        let result = style.background_color();

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid background color"));
    }
}
