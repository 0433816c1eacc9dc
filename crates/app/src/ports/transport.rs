//! Transport port — HTTP requests against the device origin.

use std::future::Future;

use picovent_domain::error::PicoventError;

/// Status and body of a completed HTTP exchange.
///
/// Transports return every completed exchange, whatever its status; deciding
/// what counts as a failure is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests to paths on the device origin (e.g. `/api/fan/speed`).
///
/// Implementations resolve the path against their origin: the page origin in
/// the browser, a configured base URL natively. Errors are reserved for
/// exchanges that did not complete (connection refused, aborted, malformed
/// URL); a `500` is a successful exchange with `status == 500`.
pub trait HttpTransport {
    /// Send a `GET` request.
    fn get(&self, path: &str) -> impl Future<Output = Result<HttpResponse, PicoventError>>;

    /// Send a `PUT` request with an `application/x-www-form-urlencoded` body.
    fn put_form(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<HttpResponse, PicoventError>>;
}
