//! Common error types used across the workspace.
//!
//! Each layer converts into [`PicoventError`] via `#[from]` or by boxing its
//! own error into [`PicoventError::Transport`]. A display element that does
//! not exist is *not* an error and has no variant here.

/// Top-level error for every operation that talks to the device.
#[derive(Debug, thiserror::Error)]
pub enum PicoventError {
    /// Input rejected before any request was made.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Network or request-construction failure reported by a transport adapter.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device answered with a non-success HTTP status.
    #[error("{endpoint} answered with HTTP {status}")]
    Status {
        /// Endpoint path that was requested.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode response from {endpoint}")]
    Decode {
        /// Endpoint path that was requested.
        endpoint: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl PicoventError {
    /// Box any adapter error into a [`PicoventError::Transport`].
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A metric binding was declared without an element id.
    #[error("element id must not be empty")]
    EmptyElementId,

    /// A metric binding was declared without an endpoint.
    #[error("endpoint must not be empty")]
    EmptyEndpoint,

    /// Endpoints are paths on the device origin and must start with `/`.
    #[error("endpoint must be an absolute path: {0}")]
    RelativeEndpoint(String),

    /// A light state must carry a value.
    #[error("light state must not be empty")]
    EmptyLightState,
}
