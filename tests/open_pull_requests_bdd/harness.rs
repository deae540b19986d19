//! Mock payload builders for the open pull request count BDD tests.

use serde_json::json;

/// Reset timestamp reported by the mock `/rate_limit` endpoint.
pub(crate) const RATE_LIMIT_RESET_AT: u64 = 1_700_000_125;

/// Clock value used when rendering the wait, 125 seconds before the reset.
pub(crate) const REFERENCE_NOW: u64 = 1_700_000_000;

/// Open and closed pull requests served on one mock page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageContents {
    pub(crate) open: u32,
    pub(crate) closed: u32,
}

pub(crate) fn rate_limit_body(remaining: u32) -> serde_json::Value {
    let used = 60_u32.saturating_sub(remaining);
    json!({
        "resources": {
            "core": {
                "limit": 60,
                "used": used,
                "remaining": remaining,
                "reset": RATE_LIMIT_RESET_AT
            },
            "search": {
                "limit": 10,
                "used": 0,
                "remaining": 10,
                "reset": RATE_LIMIT_RESET_AT
            }
        },
        "rate": {
            "limit": 60,
            "used": used,
            "remaining": remaining,
            "reset": RATE_LIMIT_RESET_AT
        }
    })
}

/// Builds the JSON body for one page, numbering entries from `first_number`.
pub(crate) fn pull_request_page(
    contents: PageContents,
    first_number: u32,
) -> Vec<serde_json::Value> {
    let states = std::iter::repeat_n("open", contents.open as usize)
        .chain(std::iter::repeat_n("closed", contents.closed as usize));

    states
        .zip(first_number..)
        .map(|(state, number)| {
            json!({
                "number": number,
                "title": format!("PR #{number}"),
                "state": state,
                "user": { "login": "contributor" }
            })
        })
        .collect()
}
