//! reqwest adapter error types.

use picovent_domain::error::PicoventError;

/// Errors specific to the reqwest transport.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or no response arrived.
    #[error("{method} {url} failed")]
    Request {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read.
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<HttpError> for PicoventError {
    fn from(err: HttpError) -> Self {
        PicoventError::transport(err)
    }
}
