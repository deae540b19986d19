//! Validated identity wrappers for the repository the user selects.
//!
//! Owner and repository answers are checked against GitHub's naming rules
//! before anything talks to the API. The wrappers can only be built from
//! input that passed validation, so the rest of the crate never re-checks.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::IntakeError;

/// Longest username GitHub accepts.
pub const MAX_OWNER_LENGTH: usize = 39;

/// Default page size for pull request listings; also the API maximum.
pub const DEFAULT_PER_PAGE: u8 = 100;

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static OWNER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:-?[A-Za-z0-9])*$").expect("owner pattern should compile")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static REPOSITORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+$").expect("repository pattern should compile")
});

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates a GitHub username.
    ///
    /// Alphanumeric characters and single hyphens are allowed; a hyphen may
    /// not start or end the name and may not follow another hyphen. At most
    /// [`MAX_OWNER_LENGTH`] characters.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidOwner` when the value breaks those rules.
    ///
    /// # Example
    ///
    /// ```
    /// use gitpulls::RepositoryOwner;
    ///
    /// assert!(RepositoryOwner::parse("octo-cat").is_ok());
    /// assert!(RepositoryOwner::parse("-octocat").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, IntakeError> {
        if value.len() > MAX_OWNER_LENGTH || !OWNER_PATTERN.is_match(value) {
            return Err(IntakeError::InvalidOwner {
                value: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates a repository name: one or more of `A-Z a-z 0-9 . _ -`.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidRepositoryName` for empty values or any
    /// other character.
    pub fn parse(value: &str) -> Result<Self, IntakeError> {
        if !REPOSITORY_PATTERN.is_match(value) {
            return Err(IntakeError::InvalidRepositoryName {
                value: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The repository chosen for this run, threaded through the whole flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRepository {
    owner: RepositoryOwner,
    repository: RepositoryName,
    per_page: u8,
}

impl SelectedRepository {
    /// Creates a selection with the default page size.
    #[must_use]
    pub const fn new(owner: RepositoryOwner, repository: RepositoryName) -> Self {
        Self {
            owner,
            repository,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Creates a selection from raw owner and repository strings.
    ///
    /// # Errors
    ///
    /// Returns the validation error of whichever value is rejected first.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, IntakeError> {
        Ok(Self::new(
            RepositoryOwner::parse(owner)?,
            RepositoryName::parse(repo)?,
        ))
    }

    /// Overrides the page size used when listing pull requests.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Page size for pull request listings.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the API path for listing pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
