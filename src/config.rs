//! Board configuration read from the host page.
//!
//! The host page configures the board through `data-*` attributes on the
//! container element, e.g.
//!
//! ```html
//! <div id="capabilities-list" data-api-base="https://api.example.com" data-log-level="debug"></div>
//! ```
//!
//! Parsing is split from DOM access so it can be exercised in native tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_CONTAINER_ID: &str = "capabilities-list";

/// How long a status message stays visible.
pub const STATUS_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Attribute on `<body>` naming the container element id.
pub const CONTAINER_ID_ATTR: &str = "data-container-id";
pub const API_BASE_ATTR: &str = "data-api-base";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for anything but
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::InvalidLogLevel(raw.to_owned())),
        }
    }

    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// Id of the element the board is mounted into.
    pub container_id: String,
    pub log_level: LogLevel,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl BoardConfig {
    /// Build config for the container `container_id` from its attributes.
    ///
    /// Optional:
    /// - `data-api-base`: API prefix, trailing `/` stripped (default same origin)
    /// - `data-log-level`: `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an attribute is present but malformed.
    pub fn from_attributes(
        container_id: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_base = lookup(API_BASE_ATTR)
            .map(|raw| normalize_api_base(&raw))
            .unwrap_or_default();
        let log_level = match lookup(LOG_LEVEL_ATTR) {
            Some(raw) if !raw.trim().is_empty() => LogLevel::parse(&raw)?,
            _ => LogLevel::default(),
        };
        Ok(Self { api_base, container_id: container_id.to_owned(), log_level })
    }
}

/// Resolve the container id from the `<body>` attribute lookup.
pub fn container_id_from(raw: Option<String>) -> String {
    raw.map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_owned())
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
