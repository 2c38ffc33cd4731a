use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown in the status field after a 2xx response.
pub const SUCCESS_MESSAGE: &str = "Post added successfully!";

/// Message carried by a non-2xx response.
pub const NON_SUCCESS_MESSAGE: &str = "Failed to add post";

/// Categorization of submission failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitErrorKind {
    Transport,
    NonSuccessStatus,
}

impl fmt::Display for SubmitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitErrorKind::Transport => write!(f, "transport_error"),
            SubmitErrorKind::NonSuccessStatus => write!(f, "non_success_status"),
        }
    }
}

/// Why a post submission failed.
///
/// Both variants render the same way in the status field; the distinction is
/// kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmitError {
    /// The HTTP exchange could not complete (connection refused, DNS, ...).
    Transport { message: String },
    /// The server answered outside the 2xx range.
    NonSuccessStatus { status: u16 },
}

impl SubmitError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn non_success(status: u16) -> Self {
        Self::NonSuccessStatus { status }
    }

    pub fn kind(&self) -> SubmitErrorKind {
        match self {
            SubmitError::Transport { .. } => SubmitErrorKind::Transport,
            SubmitError::NonSuccessStatus { .. } => SubmitErrorKind::NonSuccessStatus,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport { message } => write!(f, "{}", message),
            SubmitError::NonSuccessStatus { .. } => write!(f, "{}", NON_SUCCESS_MESSAGE),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Render the outcome of a submission as the text for the status field.
pub fn status_message(outcome: &Result<(), SubmitError>) -> String {
    match outcome {
        Ok(()) => SUCCESS_MESSAGE.to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Invalid client configuration, e.g. a posts URL that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
