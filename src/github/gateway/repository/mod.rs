//! Octocrab-backed gateway for listing pull requests.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use url::Url;

use crate::github::error::IntakeError;
use crate::github::locator::SelectedRepository;
use crate::github::models::{ApiPullRequestSummary, OPEN_STATE, PullRequestSummary};
use crate::github::pagination::PageInfo;
use crate::github::rate_limit::RateLimitInfo;

use super::PullRequestGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error, map_quota_error};

mod types;

pub use types::{ListPullRequestsParams, PaginatedPullRequests};

/// Largest page size the GitHub REST API accepts.
const MAX_PER_PAGE: u8 = 100;

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an unauthenticated Octocrab client for the given API base.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_api_base(api_base: &Url) -> Result<Self, IntakeError> {
        let octocrab = build_octocrab_client(api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn rate_limit(&self) -> Result<RateLimitInfo, IntakeError> {
        let rate = self
            .client
            .ratelimit()
            .get()
            .await
            .map_err(|error| map_quota_error(&error))?
            .rate;

        rate_limit_info(rate.limit, rate.remaining, rate.reset).ok_or_else(|| {
            IntakeError::QuotaUnavailable {
                status: None,
                message: format!(
                    "rate limit response out of range: limit {limit}, remaining {remaining}",
                    limit = rate.limit,
                    remaining = rate.remaining
                ),
            }
        })
    }

    async fn list_pull_requests(
        &self,
        repository: &SelectedRepository,
        params: &ListPullRequestsParams,
    ) -> Result<PaginatedPullRequests, IntakeError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page_str = params.page.to_string();
        let per_page_str = params.per_page.to_string();

        let query_params = [
            ("state", OPEN_STATE),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        tracing::debug!(
            owner = repository.owner().as_str(),
            repo = repository.repository().as_str(),
            page = params.page,
            per_page = params.per_page,
            "requesting pull request page"
        );

        let page_result: Page<ApiPullRequestSummary> = match self
            .client
            .get(repository.pulls_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("list pulls", &error)
                    .await);
            }
        };

        let has_next = page_result.next.is_some();

        let items: Vec<PullRequestSummary> = page_result
            .items
            .into_iter()
            .map(PullRequestSummary::from)
            .collect();

        let page_info = PageInfo::new(params.page, params.per_page).with_has_next(has_next);

        Ok(PaginatedPullRequests { items, page_info })
    }
}

impl OctocrabGateway {
    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> IntakeError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.rate_limit().await.ok();
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} (resets at {reset})",
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };

                IntakeError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }
}

fn rate_limit_info(limit: usize, remaining: usize, reset: u64) -> Option<RateLimitInfo> {
    let Ok(limit_u32) = u32::try_from(limit) else {
        return None;
    };
    let Ok(remaining_u32) = u32::try_from(remaining) else {
        return None;
    };
    Some(RateLimitInfo::new(limit_u32, remaining_u32, reset))
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), IntakeError> {
    if page == 0 {
        return Err(IntakeError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(IntakeError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(IntakeError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}
