//! Scenario state and runtime/server initialisation for the open pull request
//! count BDD tests.

use std::cell::RefCell;
use std::rc::Rc;

use gitpulls::{
    IntakeError, OctocrabGateway, OpenPullRequestIntake, OpenPullRequestReport,
    SelectedRepository,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::harness::{PageContents, pull_request_page};

pub(crate) const PULLS_PATH: &str = "/repos/owner/repo/pulls";

/// Shared runtime wrapper that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct CountState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) pages: Slot<Vec<PageContents>>,
    pub(crate) report: Slot<OpenPullRequestReport>,
    pub(crate) error: Slot<IntakeError>,
}

/// Ensures the runtime and mock server are initialised in `CountState`.
pub(crate) fn ensure_runtime_and_server(count_state: &CountState) -> SharedRuntime {
    if count_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        count_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = count_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if count_state.server.with_ref(|_| ()).is_none() {
        count_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Mounts the queued pages, then counts open pull requests for `owner/repo`.
pub(crate) fn count_open_pull_requests(
    count_state: &CountState,
) -> Result<OpenPullRequestReport, IntakeError> {
    let runtime = ensure_runtime_and_server(count_state);
    let server_uri = count_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server not initialised"));

    let pages = count_state.pages.take().unwrap_or_default();
    for mock in page_mocks(&server_uri, &pages) {
        count_state
            .server
            .with_ref(|server| runtime.block_on(mock.mount(server)))
            .unwrap_or_else(|| panic!("mock server not initialised"));
    }

    let api_base =
        Url::parse(&server_uri).map_err(|error| IntakeError::InvalidUrl(error.to_string()))?;
    let repository = SelectedRepository::from_owner_repo("owner", "repo")?;

    runtime.block_on(async {
        let gateway = OctocrabGateway::for_api_base(&api_base)?;
        OpenPullRequestIntake::new(&gateway)
            .count_open(&repository)
            .await
    })
}

fn page_mocks(server_uri: &str, pages: &[PageContents]) -> Vec<Mock> {
    let mut first_number = 1_u32;
    let mut mocks = Vec::with_capacity(pages.len());

    for (contents, page) in pages.iter().zip(1_u32..) {
        let mut response = ResponseTemplate::new(200)
            .set_body_json(pull_request_page(*contents, first_number));
        if (page as usize) < pages.len() {
            response = response.insert_header(
                "Link",
                format!(
                    "<{server_uri}{PULLS_PATH}?state=open&page={next}&per_page=100>; rel=\"next\"",
                    next = page + 1
                ),
            );
        }
        first_number += contents.open + contents.closed;

        mocks.push(
            Mock::given(method("GET"))
                .and(path(PULLS_PATH))
                .and(query_param("state", "open"))
                .and(query_param("page", page.to_string()))
                .and(query_param("per_page", "100"))
                .respond_with(response),
        );
    }

    mocks
}

/// Number of pull request listing requests the mock server has seen.
pub(crate) fn pulls_requests_received(count_state: &CountState) -> usize {
    let runtime = ensure_runtime_and_server(count_state);
    count_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .flatten()
        .unwrap_or_else(|| panic!("request recording should be enabled"))
        .iter()
        .filter(|request| request.url.path() == PULLS_PATH)
        .count()
}
