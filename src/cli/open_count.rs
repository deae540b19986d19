//! Interactive open pull request count.

use std::io::{self, BufRead, Write};

use gitpulls::github::PullRequestGateway;
use gitpulls::github::rate_limit::unix_now;
use gitpulls::{GitPullsConfig, IntakeError, OctocrabGateway, OpenPullRequestIntake};
use url::Url;

use super::output::{write_banner, write_report, write_selection};
use super::prompt::Prompter;

/// Prompts on the terminal and prints the open pull request count.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] for invalid settings, prompt
/// failures such as [`IntakeError::InputClosed`], and any failure from the
/// GitHub API.
pub async fn run(config: &GitPullsConfig) -> Result<(), IntakeError> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGateway::for_api_base, stdin, &mut stdout).await
}

/// Runs the count using a custom gateway builder.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway_builder<G, F, R, W>(
    config: &GitPullsConfig,
    build_gateway: F,
    input: R,
    writer: &mut W,
) -> Result<(), IntakeError>
where
    G: PullRequestGateway,
    F: FnOnce(&Url) -> Result<G, IntakeError>,
    R: BufRead,
    W: Write,
{
    let api_base = config.api_base()?;
    let per_page = config.page_size()?;
    let attempt_limit = config.attempt_limit()?;

    write_banner(writer)?;
    let repository =
        Prompter::new(input, &mut *writer, attempt_limit).select_repository(per_page)?;
    write_selection(writer, &repository)?;

    let gateway = build_gateway(&api_base)?;
    let report = OpenPullRequestIntake::new(&gateway)
        .count_open(&repository)
        .await?;
    write_report(writer, &report, unix_now())
}
