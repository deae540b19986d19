//! Application configuration loaded from CLI, environment, and files.
//!
//! The tool is interactive and needs no configuration; with nothing set it
//! talks to `https://api.github.com`, lists 100 pull requests per page, and
//! re-prompts without limit. These values can be overridden through
//! ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gitpulls.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GITPULLS_API_URL`, `GITPULLS_PER_PAGE`,
//!    `GITPULLS_MAX_ATTEMPTS`, `GITPULLS_LOG_LEVEL`
//! 4. **Command-line arguments** – `--api-url`, `--per-page`,
//!    `--max-attempts`, `--log-level`
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://ghe.example.com/api/v3"
//! per_page = 50
//! max_attempts = 3
//! log_level = "debug"
//! ```

use std::num::NonZeroU32;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::IntakeError;
use crate::github::locator::DEFAULT_PER_PAGE;

/// Public GitHub REST API base.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Log filter used when neither `RUST_LOG` nor configuration sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use gitpulls::GitPullsConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GitPullsConfig::load().expect("failed to load configuration");
/// let api_base = config.api_base().expect("API URL should be valid");
/// assert_eq!(api_base.as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITPULLS",
    discovery(
        dotfile_name = ".gitpulls.toml",
        config_file_name = "gitpulls.toml",
        app_name = "gitpulls"
    )
)]
pub struct GitPullsConfig {
    /// Base URL of the GitHub REST API.
    ///
    /// Point this at `https://<host>/api/v3` for GitHub Enterprise.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `GITPULLS_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: String,

    /// Pull requests requested per page, between 1 and 100.
    ///
    /// Can be provided via:
    /// - CLI: `--per-page <N>`
    /// - Environment: `GITPULLS_PER_PAGE`
    /// - Config file: `per_page = 100`
    #[ortho_config()]
    pub per_page: u8,

    /// Maximum answers accepted per prompt before giving up.
    ///
    /// Unset means the prompt repeats until a valid answer is given.
    ///
    /// Can be provided via:
    /// - CLI: `--max-attempts <N>` or `-m <N>`
    /// - Environment: `GITPULLS_MAX_ATTEMPTS`
    /// - Config file: `max_attempts = 3`
    #[ortho_config(cli_short = 'm')]
    pub max_attempts: Option<u32>,

    /// Tracing filter directive for diagnostics written to stderr.
    ///
    /// `RUST_LOG` takes precedence when set.
    ///
    /// Can be provided via:
    /// - CLI: `--log-level <FILTER>`
    /// - Environment: `GITPULLS_LOG_LEVEL`
    /// - Config file: `log_level = "debug"`
    #[ortho_config()]
    pub log_level: String,
}

impl Default for GitPullsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            per_page: DEFAULT_PER_PAGE,
            max_attempts: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl GitPullsConfig {
    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when the URL does not parse or
    /// does not use `http`/`https`.
    pub fn api_base(&self) -> Result<Url, IntakeError> {
        let parsed = Url::parse(&self.api_url).map_err(|error| IntakeError::Configuration {
            message: format!("api_url {:?} is invalid: {error}", self.api_url),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(IntakeError::Configuration {
                message: format!("api_url must use http or https, got {other}"),
            }),
        }
    }

    /// Returns the configured page size.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when `per_page` is outside
    /// `1..=100`.
    pub fn page_size(&self) -> Result<u8, IntakeError> {
        if (1..=DEFAULT_PER_PAGE).contains(&self.per_page) {
            Ok(self.per_page)
        } else {
            Err(IntakeError::Configuration {
                message: format!(
                    "per_page must be between 1 and {DEFAULT_PER_PAGE}, got {}",
                    self.per_page
                ),
            })
        }
    }

    /// Returns the prompt attempt limit, or `None` for unlimited retries.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when `max_attempts` is zero.
    pub fn attempt_limit(&self) -> Result<Option<NonZeroU32>, IntakeError> {
        match self.max_attempts {
            None => Ok(None),
            Some(attempts) => NonZeroU32::new(attempts)
                .map(Some)
                .ok_or_else(|| IntakeError::Configuration {
                    message: "max_attempts must be at least 1 (omit it for no limit)".to_owned(),
                }),
        }
    }
}

#[cfg(test)]
mod tests;
