//! gitpulls CLI entrypoint for counting open pull requests.

mod cli;

use std::io;
use std::process::ExitCode;

use gitpulls::github::rate_limit::unix_now;
use gitpulls::{GitPullsConfig, IntakeError};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(error) => return report(&error),
    };

    // Only fails when a subscriber is already installed.
    let _ignored = gitpulls::logging::init(&config.log_level);

    match cli::open_count::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(%error, "run failed");
            report(&error)
        }
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GitPullsConfig, IntakeError> {
    GitPullsConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}

fn report(error: &IntakeError) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    // Exit status is the same whether or not the message could be written.
    let _unwritten = cli::output::report_failure(&mut stdout, &mut stderr, error, unix_now());
    ExitCode::FAILURE
}
