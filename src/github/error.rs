//! Error types exposed by the GitHub intake layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while reading input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The owner answer does not follow GitHub's username rules.
    #[error("repository owner is not a valid GitHub username: {value:?}")]
    InvalidOwner {
        /// The rejected answer.
        value: String,
    },

    /// The repository answer contains characters GitHub does not allow.
    #[error("repository name is invalid: {value:?}")]
    InvalidRepositoryName {
        /// The rejected answer.
        value: String,
    },

    /// The configured API base could not be parsed.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// Standard input closed before a valid answer was given.
    #[error("input closed before a valid {field} was entered")]
    InputClosed {
        /// The prompt field that was waiting for input.
        field: &'static str,
    },

    /// The configured attempt limit was reached without a valid answer.
    #[error("no valid {field} after {attempts} attempts")]
    TooManyAttempts {
        /// The prompt field that kept being rejected.
        field: &'static str,
        /// Number of answers that were rejected.
        attempts: u32,
    },

    /// GitHub answered 404 for the repository.
    #[error("repository not found: {message}")]
    NotFound {
        /// GitHub error message returned with the response.
        message: String,
    },

    /// GitHub answered 500.
    #[error("GitHub internal server error: {message}")]
    InternalServerError {
        /// GitHub error message returned with the response.
        message: String,
    },

    /// GitHub returned a status without a dedicated variant.
    #[error("GitHub API error: {message}")]
    Api {
        /// HTTP status code, when the failure carried one.
        status: Option<u16>,
        /// Response detail from GitHub describing the failure.
        message: String,
    },

    /// The `/rate_limit` query failed, so no quota check could be made.
    #[error("could not read the GitHub API quota: {message}")]
    QuotaUnavailable {
        /// HTTP status code, when the failure carried one.
        status: Option<u16>,
        /// Failure detail.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded while a request was in flight.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or held an invalid value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl From<std::io::Error> for IntakeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
