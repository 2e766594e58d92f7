//! Configuration types.

use chrono::Duration;

use crate::error::{ConfigError, Result};

/// Shown wherever an extracted contact field is absent.
pub const DEFAULT_PLACEHOLDER: &str = "\u{2014}";

/// Presentation settings for the triage queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Text rendered in place of absent contact fields.
    pub placeholder: String,
    /// Window, in hours, for the "recent" headline count.
    pub recent_window_hours: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            recent_window_hours: 24,
        }
    }
}

impl QueueConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// - `SUPPORT_TRIAGE_PLACEHOLDER`
    /// - `SUPPORT_TRIAGE_RECENT_HOURS`
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> std::result::Result<Self, ConfigError> {
        let defaults = Self::default();

        let placeholder = lookup("SUPPORT_TRIAGE_PLACEHOLDER").unwrap_or(defaults.placeholder);

        let recent_window_hours = match lookup("SUPPORT_TRIAGE_RECENT_HOURS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    key: "SUPPORT_TRIAGE_RECENT_HOURS".into(),
                    message: e.to_string(),
                })?,
            None => defaults.recent_window_hours,
        };

        Ok(Self {
            placeholder,
            recent_window_hours,
        })
    }

    pub fn recent_window(&self) -> Duration {
        Duration::hours(i64::from(self.recent_window_hours))
    }
}
