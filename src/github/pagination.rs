//! Pagination state for GitHub list responses.
//!
//! GitHub advertises further pages through the `Link` header. `PageInfo`
//! records where a fetched page sits so the intake can decide whether to
//! request another one.

/// Position of one fetched page within a paginated result set.
///
/// # Example
///
/// ```
/// use gitpulls::github::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 100).with_has_next(true);
/// assert!(!info.is_last_page());
/// assert_eq!(info.next_page(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page.
    per_page: u8,
    /// Whether more pages exist after the current one.
    has_next: bool,
}

impl PageInfo {
    /// Creates a page info instance with no following page.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u8) -> Self {
        Self {
            current_page,
            per_page,
            has_next: false,
        }
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_next
    }

    /// Page number to request next, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
