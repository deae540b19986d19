//! Public types for repository gateway operations.

use crate::github::models::PullRequestSummary;
use crate::github::pagination::PageInfo;

/// Parameters for listing one page of pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl ListPullRequestsParams {
    /// Parameters for the given page at the given page size.
    #[must_use]
    pub const fn new(page: u32, per_page: u8) -> Self {
        Self { page, per_page }
    }
}

/// Paginated pull request listing result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedPullRequests {
    /// Pull request summaries on this page.
    pub items: Vec<PullRequestSummary>,
    /// Pagination state.
    pub page_info: PageInfo,
}
