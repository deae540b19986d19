//! Support modules for the open pull request count BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{PageContents, RATE_LIMIT_RESET_AT, REFERENCE_NOW, rate_limit_body};
pub(crate) use state::{
    CountState, PULLS_PATH, count_open_pull_requests, ensure_runtime_and_server,
    pulls_requests_received,
};
