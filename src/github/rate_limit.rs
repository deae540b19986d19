//! Rate limit information from the GitHub `/rate_limit` endpoint.
//!
//! The tool checks the remaining quota before fetching pull requests. When
//! the quota is exhausted it reports how long the user has to wait, rendered
//! as a zero-padded `MM:SS` [`WaitTime`].

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rate limit information for the core REST API.
///
/// # Example
///
/// ```
/// use gitpulls::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(60, 0, 1_700_000_125);
/// assert!(info.is_exhausted());
/// assert_eq!(info.wait_time_from(1_700_000_000).to_string(), "02:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window.
    limit: u32,
    /// Remaining requests in the current window.
    remaining: u32,
    /// Unix timestamp when the rate limit resets.
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true if the rate limit has been exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Time left until the quota refills, measured from `now` (Unix seconds).
    ///
    /// Saturates at zero when the reset time has already passed.
    #[must_use]
    pub const fn wait_time_from(&self, now: u64) -> WaitTime {
        WaitTime::from_secs(self.reset_at.saturating_sub(now))
    }

    /// Time left until the quota refills, measured from the system clock.
    ///
    /// Returns a zero wait if the system time cannot be determined.
    #[must_use]
    pub fn wait_time(&self) -> WaitTime {
        self.wait_time_from(unix_now())
    }
}

/// Remaining wait before the rate limit resets.
///
/// Displays as `MM:SS`. Minutes are not folded into hours, so an hour renders
/// as `60:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WaitTime(u64);

impl WaitTime {
    /// Creates a wait time from a number of seconds.
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Total number of seconds to wait.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splitting seconds into whole minutes and leftover seconds"
    )]
    const fn minutes_and_seconds(self) -> (u64, u64) {
        (self.0 / 60, self.0 % 60)
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes, seconds) = self.minutes_and_seconds();
        write!(f, "{minutes:02}:{seconds:02}")
    }
}

/// Current Unix time in seconds, or 0 if the system clock is before the epoch.
#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}
