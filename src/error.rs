//! Error types for the capability board.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. `ApiError` is turned into a transient status
//! message by `actions`, `ConfigError` falls back to defaults, and
//! `MountError` is logged by the start entry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single HTTP call against the capabilities API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// HTTP is only wired up in the browser (`csr`) build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided explanation for a rejected request, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether this is an application-level rejection rather than a transport problem.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Reasons the board could not be attached to the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("container element #{0} not found")]
    ContainerNotFound(String),
    #[error("element #{0} is not an HTML element")]
    NotHtmlElement(String),
}
