//! Output formatting utilities for CLI operations.

use std::io::Write;

use gitpulls::{IntakeError, OpenPullRequestReport, RateLimitInfo, SelectedRepository};

/// Greeting printed before the first prompt.
pub const BANNER: &str = "Welcome to Multitudes CLI! Let’s process some Github Data!";

/// Writes the banner followed by a blank line.
pub fn write_banner<W: Write>(writer: &mut W) -> Result<(), IntakeError> {
    writeln!(writer, "{BANNER}")?;
    writeln!(writer)?;
    Ok(())
}

/// Echoes the accepted owner and repository.
pub fn write_selection<W: Write>(
    writer: &mut W,
    repository: &SelectedRepository,
) -> Result<(), IntakeError> {
    writeln!(
        writer,
        "owner: {} name: {}",
        repository.owner(),
        repository.repository()
    )?;
    Ok(())
}

/// Writes the outcome of a count, computing any wait relative to `now`.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &OpenPullRequestReport,
    now: u64,
) -> Result<(), IntakeError> {
    match report {
        OpenPullRequestReport::RateLimited(info) => write_rate_limited(writer, info, now),
        OpenPullRequestReport::Counted { open, .. } => {
            writeln!(writer, "# of open PR: {open}")?;
            Ok(())
        }
    }
}

fn write_rate_limited<W: Write>(
    writer: &mut W,
    info: &RateLimitInfo,
    now: u64,
) -> Result<(), IntakeError> {
    writeln!(
        writer,
        "Rate limit exceeded. Try again in {}.",
        info.wait_time_from(now)
    )?;
    Ok(())
}

/// Routes a failure to the channel the user expects to see it on.
///
/// Repository and server failures, plus a rate limit hit while paging, are
/// user-facing messages on `stdout`. Any other listing status prints nothing;
/// it is already logged at `warn`. Everything else, including API failures
/// without a status, goes to `stderr`.
pub fn report_failure<O: Write, E: Write>(
    stdout: &mut O,
    stderr: &mut E,
    error: &IntakeError,
    now: u64,
) -> Result<(), IntakeError> {
    match error {
        IntakeError::NotFound { .. } => writeln!(stdout, "Repository not found")?,
        IntakeError::InternalServerError { .. } => writeln!(stdout, "Internal server error")?,
        IntakeError::RateLimitExceeded {
            rate_limit: Some(info),
            ..
        } => write_rate_limited(stdout, info, now)?,
        IntakeError::Api { status: Some(_), .. } => {}
        other => writeln!(stderr, "{other}")?,
    }
    Ok(())
}
