//! High-level intake facade used by the CLI.
//!
//! Checks the API quota, walks every page of open pull requests, and reduces
//! them to an [`OpenPullRequestReport`].

use super::error::IntakeError;
use super::gateway::{ListPullRequestsParams, PullRequestGateway};
use super::locator::SelectedRepository;
use super::models::{OpenPullRequestReport, PullRequestSummary};

/// Counts open pull requests using a gateway.
pub struct OpenPullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> OpenPullRequestIntake<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Check the quota, then count open pull requests across all pages.
    ///
    /// An exhausted quota is reported as [`OpenPullRequestReport::RateLimited`]
    /// and no listing request is made.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, such as an unknown
    /// repository, a server error, or a network problem.
    pub async fn count_open(
        &self,
        repository: &SelectedRepository,
    ) -> Result<OpenPullRequestReport, IntakeError> {
        let rate_limit = self.client.rate_limit().await?;
        if rate_limit.is_exhausted() {
            tracing::info!(
                reset_at = rate_limit.reset_at(),
                "rate limit exhausted, skipping pull request fetch"
            );
            return Ok(OpenPullRequestReport::RateLimited(rate_limit));
        }

        let pulls = self.fetch_all(repository).await?;
        let open = pulls.iter().filter(|pull| pull.is_open()).count();
        tracing::debug!(open, total = pulls.len(), "counted pull requests");

        Ok(OpenPullRequestReport::Counted {
            open,
            total: pulls.len(),
        })
    }

    /// Fetch every page of pull requests, following `next` links.
    ///
    /// # Errors
    ///
    /// Returns the first gateway failure; pages fetched before it are dropped.
    pub async fn fetch_all(
        &self,
        repository: &SelectedRepository,
    ) -> Result<Vec<PullRequestSummary>, IntakeError> {
        let mut pulls = Vec::new();
        let mut params = ListPullRequestsParams::new(1, repository.per_page());

        loop {
            let page = self.client.list_pull_requests(repository, &params).await?;
            let fetched = page.items.len();
            pulls.extend(page.items);

            match page.page_info.next_page() {
                Some(next) if fetched > 0 => params.page = next,
                _ => break,
            }
        }

        Ok(pulls)
    }
}
