//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use url::Url;

use crate::github::error::IntakeError;

use super::error_mapping::map_octocrab_error;

/// Builds an unauthenticated Octocrab client for the given API base URL.
///
/// Automatic retries are disabled so every request is sent exactly once.
///
/// # Errors
///
/// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
/// `IntakeError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(api_base: &Url) -> Result<Octocrab, IntakeError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| IntakeError::Api {
            status: None,
            message: format!("build client failed: {error}"),
        })?
        .add_retry_config(RetryConfig::None)
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
