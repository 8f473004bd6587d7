use thiserror::Error;

/// Crate-level error for the probe pipeline.
///
/// Only `SessionStart` is fatal to a batch: it is raised before any input is
/// processed. Element and timeout failures are recovered per input and
/// downgraded to `status = "error"` verdict rows by the checker.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The WebDriver backend refused to create a session.
    #[error("automation backend failed to start: {0}")]
    SessionStart(String),

    /// An expected page element never appeared within the wait deadline.
    #[error("element {selector:?} not found within {secs}s")]
    ElementNotFound { selector: String, secs: u64 },

    /// The result element never became visible within the wait deadline.
    #[error("no prediction visible in {selector:?} within {secs}s")]
    PredictionTimeout { selector: String, secs: u64 },

    /// The WebDriver endpoint answered with a protocol-level error payload.
    #[error("webdriver error ({status} {error}): {message}")]
    WebDriver {
        status: u16,
        error: String,
        message: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// True for failures that abort the whole batch rather than one input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProbeError::SessionStart(_))
    }
}
