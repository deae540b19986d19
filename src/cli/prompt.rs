//! Interactive prompts for selecting a repository.

use std::io::{BufRead, Write};
use std::num::NonZeroU32;

use gitpulls::{IntakeError, RepositoryName, RepositoryOwner, SelectedRepository};

/// Question asked for the repository owner.
pub const OWNER_QUESTION: &str = "Who is the repo owner? ";
/// Printed after an owner answer is rejected.
pub const OWNER_RETRY: &str = "Please enter a correct owner username.";
/// Question asked for the repository name.
pub const REPO_QUESTION: &str = "What is the repo name? ";
/// Printed after a repository answer is rejected; followed by a blank line.
pub const REPO_RETRY: &str = "Please enter a correct repo name.\n";

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    attempt_limit: Option<NonZeroU32>,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a prompter; `None` for `attempt_limit` retries forever.
    pub const fn new(input: R, output: W, attempt_limit: Option<NonZeroU32>) -> Self {
        Self {
            input,
            output,
            attempt_limit,
        }
    }

    /// Asks for owner then repository until both are valid.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InputClosed`] when input ends,
    /// [`IntakeError::TooManyAttempts`] when the attempt limit is reached, or
    /// [`IntakeError::Io`] when reading or writing fails.
    pub fn select_repository(&mut self, per_page: u8) -> Result<SelectedRepository, IntakeError> {
        let owner = self.ask("owner", OWNER_QUESTION, OWNER_RETRY, RepositoryOwner::parse)?;
        writeln!(self.output)?;
        let repository = self.ask(
            "repo name",
            REPO_QUESTION,
            REPO_RETRY,
            RepositoryName::parse,
        )?;

        Ok(SelectedRepository::new(owner, repository).with_per_page(per_page))
    }

    /// Repeats `question` until `parse` accepts the answer.
    ///
    /// Only the line terminator is stripped; other whitespace is part of the
    /// answer.
    ///
    /// # Errors
    ///
    /// See [`Prompter::select_repository`].
    pub fn ask<T, P>(
        &mut self,
        field: &'static str,
        question: &str,
        retry_message: &str,
        parse: P,
    ) -> Result<T, IntakeError>
    where
        P: Fn(&str) -> Result<T, IntakeError>,
    {
        let mut rejected: u32 = 0;

        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(IntakeError::InputClosed { field });
            }

            match parse(strip_line_terminator(&line)) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    tracing::debug!(%error, "rejected {field} answer");
                    rejected = rejected.saturating_add(1);
                    writeln!(self.output, "{retry_message}")?;

                    if self
                        .attempt_limit
                        .is_some_and(|limit| rejected >= limit.get())
                    {
                        return Err(IntakeError::TooManyAttempts {
                            field,
                            attempts: rejected,
                        });
                    }
                }
            }
        }
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let without_newline = line.strip_suffix('\n').unwrap_or(line);
    without_newline
        .strip_suffix('\r')
        .unwrap_or(without_newline)
}
