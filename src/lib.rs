//! Gitpulls library crate for counting a repository's open pull requests.
//!
//! The library wraps Octocrab to validate owner and repository names, check
//! the GitHub API quota, page through pull requests, and surface friendly
//! errors that the CLI turns into short messages.

pub mod config;
pub mod github;
pub mod logging;

pub use config::GitPullsConfig;
pub use github::{
    IntakeError, OctocrabGateway, OpenPullRequestIntake, OpenPullRequestReport, RateLimitInfo,
    RepositoryName, RepositoryOwner, SelectedRepository,
};
