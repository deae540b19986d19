//! Error mapping helpers for the Octocrab gateway.
//!
//! Failures are classified once here. For the pull request listing, 404 and
//! 500 get dedicated variants because the CLI prints a specific message for
//! each; every other status lands in `IntakeError::Api`. A failed quota query
//! is `IntakeError::QuotaUnavailable` whatever its status.

use http::StatusCode;

use crate::github::error::IntakeError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> IntakeError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return IntakeError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    IntakeError::Api {
        status: None,
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a failed `/rate_limit` query.
///
/// 404 and 500 are not classified here; they describe the API base rather
/// than the selected repository.
pub(super) fn map_quota_error(error: &octocrab::Error) -> IntakeError {
    if is_network_error(error) {
        return IntakeError::Network {
            message: format!("rate limit failed: {error}"),
        };
    }

    match error {
        octocrab::Error::GitHub { source, .. } => IntakeError::QuotaUnavailable {
            status: Some(source.status_code.as_u16()),
            message: format!(
                "status {status}: {message}",
                status = source.status_code,
                message = source.message
            ),
        },
        other => IntakeError::QuotaUnavailable {
            status: None,
            message: other.to_string(),
        },
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> IntakeError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    match status {
        StatusCode::NOT_FOUND => IntakeError::NotFound {
            message: format!("{operation} failed: {message}"),
        },
        StatusCode::INTERNAL_SERVER_ERROR => IntakeError::InternalServerError {
            message: format!("{operation} failed: {message}"),
        },
        _ => {
            tracing::warn!(%status, %message, "{operation} failed with an unclassified status");
            IntakeError::Api {
                status: Some(status.as_u16()),
                message: format!("{operation} failed with status {status}: {message}"),
            }
        }
    }
}
