//! GitHub repository selection and open pull request counting.
//!
//! This module wraps Octocrab to check the API quota, page through a
//! repository's pull requests, and count the open ones. Errors are mapped into
//! [`IntakeError`] variants so callers can print precise messages without
//! exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::IntakeError;
pub use gateway::{
    ListPullRequestsParams, OctocrabGateway, PaginatedPullRequests, PullRequestGateway,
};
pub use intake::OpenPullRequestIntake;
pub use locator::{RepositoryName, RepositoryOwner, SelectedRepository};
pub use models::{OpenPullRequestReport, PullRequestSummary};
pub use pagination::PageInfo;
pub use rate_limit::{RateLimitInfo, WaitTime};

#[cfg(test)]
pub use gateway::MockPullRequestGateway;
