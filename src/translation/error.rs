use std::time::Duration;

use thiserror::Error;

/// Every way a single translation can fail.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Source text was empty; nothing was sent.
    #[error("Input is empty")]
    EmptyInput,

    #[error("Unsupported translation direction: '{0}'")]
    UnsupportedDirection(String),

    /// The endpoint answered with a non-200 status.
    #[error("Error {status}: {message}")]
    RemoteService { status: u16, message: String },

    /// Connection failure, timeout, or an unusable response body.
    #[error("Transport error: {message}")]
    Transport { message: String, timed_out: bool },
}

impl TranslateError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(after: Duration) -> Self {
        Self::Transport {
            message: format!("request timed out after {}s", after.as_secs()),
            timed_out: true,
        }
    }

    /// Whether the outbound call hit the configured timeout.
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }
}
