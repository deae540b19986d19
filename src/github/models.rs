//! Data models for pull request listings.
//!
//! Types prefixed with `Api` are deserialisation targets for GitHub payloads
//! that convert into the public domain types.

use serde::Deserialize;

/// State value GitHub reports for open pull requests.
pub const OPEN_STATE: &str = "open";

/// Lightweight pull request summary for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// State (e.g. open, closed).
    pub state: Option<String>,
}

impl PullRequestSummary {
    /// Returns true when GitHub reports the pull request as `open`.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some(OPEN_STATE)
    }
}

/// API response type for one entry of a pull request listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestSummary {
    pub(super) number: u64,
    pub(super) state: Option<String>,
}

impl From<ApiPullRequestSummary> for PullRequestSummary {
    fn from(value: ApiPullRequestSummary) -> Self {
        Self {
            number: value.number,
            state: value.state,
        }
    }
}

/// Outcome of counting open pull requests for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenPullRequestReport {
    /// The API quota is exhausted; no pull requests were requested.
    RateLimited(super::rate_limit::RateLimitInfo),
    /// Every page was fetched and counted.
    Counted {
        /// Entries whose state is `open`.
        open: usize,
        /// Entries fetched across all pages.
        total: usize,
    },
}
