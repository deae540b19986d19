//! Gateway for loading pull request data through Octocrab.
//!
//! The trait-based seam lets the intake be tested against mocks while the
//! Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod repository;

pub use repository::{ListPullRequestsParams, OctocrabGateway, PaginatedPullRequests};

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::SelectedRepository;
use crate::github::rate_limit::RateLimitInfo;

/// Gateway that can query quota and list pull requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the current core API quota.
    async fn rate_limit(&self) -> Result<RateLimitInfo, IntakeError>;

    /// List one page of open pull requests for the repository.
    async fn list_pull_requests(
        &self,
        repository: &SelectedRepository,
        params: &ListPullRequestsParams,
    ) -> Result<PaginatedPullRequests, IntakeError>;
}
