//! Error types for the site widgets
//!
//! Form errors never escape the controller: they are stored in the `Failed`
//! phase and rendered through their `Display` text.

use thiserror::Error;

/// Message shown when a required field is missing
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

/// Message shown for any transport or server failure
pub const SUBMISSION_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message shown when the backend did not answer in time
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please try again.";

/// Why a demo request submission ended in `Failed`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was empty; no request was sent
    #[error("{}", VALIDATION_MESSAGE)]
    Validation {
        /// Labels of the fields that were missing
        missing: Vec<&'static str>,
    },
    /// The request was sent but did not succeed
    #[error("{0}")]
    Submission(#[from] SubmissionError),
}

/// Failure of the outbound demo request write
///
/// The `Display` text is user facing; the variant payloads are for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Connection refused, DNS failure, broken body, ...
    #[error("{}", SUBMISSION_MESSAGE)]
    Transport(String),
    /// The backend answered with a non-2xx status
    #[error("{}", SUBMISSION_MESSAGE)]
    Status(u16),
    /// The request exceeded the configured timeout
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,
}

/// Malformed slider input, recovered by holding the last position
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliderInputError {
    #[error("container width {0} cannot be used for positioning")]
    InvalidWidth(f64),
    #[error("non-finite coordinate {0}")]
    NonFinite(f64),
    #[error("touch event without touch points")]
    NoTouchPoints,
}

/// Invalid site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidBackendUrl { url: String, reason: String },
    #[error("invalid request timeout {0:?}")]
    InvalidTimeout(String),
}
