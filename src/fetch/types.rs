//! Fetch result data structures.

use std::collections::BTreeMap;
use std::time::Duration;

/// Outcome of a successful fetch: the response received after following
/// every redirect.
///
/// Any status code counts as success here, including 4xx and 5xx; only
/// transport failures are reported as [`FetchError`](crate::error_handling::FetchError).
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status of the final response.
    pub status_code: u16,
    /// URL of the final response.
    pub final_url: String,
    /// URLs that answered with a redirect, in visit order. Empty if the first
    /// request was answered directly.
    pub redirect_chain: Vec<String>,
    /// Final response headers with lower-case names. Repeated headers are
    /// joined with `", "`.
    pub headers: BTreeMap<String, String>,
    /// Raw body bytes, after any `Content-Encoding` was undone by the client.
    pub body: Vec<u8>,
    /// Time from the first request until the final response headers arrived.
    pub elapsed: Duration,
}

impl FetchResult {
    pub fn redirected(&self) -> bool {
        !self.redirect_chain.is_empty()
    }

    /// Looks up a response header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Elapsed time in seconds, rounded to three decimals.
    pub fn response_time_secs(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 1000.0).round() / 1000.0
    }
}
