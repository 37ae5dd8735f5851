// src/core/error.rs
use thiserror::Error;

/// Any failed backend call. Callers treat every variant the same way;
/// the split only exists so the log line says what actually went wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("unreadable response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl BackendError {
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}
