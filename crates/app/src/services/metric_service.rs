//! Metric service — refresh displayed metrics and switch the light.
//!
//! Every operation here swallows its failures: errors are written to the
//! diagnostic log (`tracing`) and reported back only as an outcome value, so
//! one failing metric never affects another or the caller.

use futures::future::join_all;
use picovent_domain::binding::{LIGHT_STATE, MetricBinding};
use picovent_domain::display::display_text;
use picovent_domain::error::PicoventError;
use picovent_domain::light::LightState;

use crate::ports::{Document, HttpResponse, HttpTransport};

/// Result of one [`MetricService::refresh_metric`] call.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The element now shows this text.
    Displayed(String),
    /// The value was fetched but the document has no such element.
    ElementMissing,
    /// The request failed; nothing was changed. The error was already logged.
    Failed(PicoventError),
}

impl RefreshOutcome {
    /// Text written to the element, if any.
    #[must_use]
    pub fn displayed(&self) -> Option<&str> {
        match self {
            Self::Displayed(text) => Some(text),
            _ => None,
        }
    }
}

/// Result of one [`MetricService::set_light_state`] call.
#[derive(Debug)]
pub enum ControlOutcome {
    /// The device accepted the new state; the light-state element was then
    /// refreshed from the device.
    Applied {
        /// Plain-text body the device answered the `PUT` with.
        reply: String,
        /// Outcome of the follow-up refresh.
        refresh: RefreshOutcome,
    },
    /// The request failed; no refresh was attempted. The error was already logged.
    Failed(PicoventError),
}

/// Application service polling the device and writing into a [`Document`].
pub struct MetricService<T, D> {
    transport: T,
    document: D,
}

impl<T: HttpTransport, D: Document> MetricService<T, D> {
    /// Create a new service on top of a transport and a display document.
    pub fn new(transport: T, document: D) -> Self {
        Self {
            transport,
            document,
        }
    }

    /// Access the display document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Fetch one metric and show it in its bound element.
    ///
    /// A missing element is a silent no-op. Transport, status and decode
    /// failures are logged and returned as [`RefreshOutcome::Failed`]; they
    /// are never retried.
    pub async fn refresh_metric(&self, binding: &MetricBinding) -> RefreshOutcome {
        let text = match self.fetch_text(binding.endpoint()).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(
                    element = binding.element_id(),
                    endpoint = binding.endpoint(),
                    error = %error_chain(&err),
                    "failed to refresh metric"
                );
                return RefreshOutcome::Failed(err);
            }
        };

        if self.document.set_text(binding.element_id(), &text) {
            tracing::debug!(element = binding.element_id(), %text, "metric displayed");
            RefreshOutcome::Displayed(text)
        } else {
            tracing::debug!(element = binding.element_id(), "no such element, update skipped");
            RefreshOutcome::ElementMissing
        }
    }

    /// Refresh every binding concurrently.
    ///
    /// Completions are unordered; the returned outcomes follow the order of
    /// `bindings`.
    pub async fn refresh_all(&self, bindings: &[MetricBinding]) -> Vec<RefreshOutcome> {
        join_all(bindings.iter().map(|binding| self.refresh_metric(binding))).await
    }

    /// Ask the device to switch the light, then re-read the light state.
    ///
    /// The light-state element always reflects what the device reports after
    /// the write, never the requested value. On failure nothing is refreshed.
    pub async fn set_light_state(&self, state: &LightState) -> ControlOutcome {
        let binding = LIGHT_STATE;
        let endpoint = binding.endpoint();
        let reply = match self.put_light_state(endpoint, state).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(
                    endpoint,
                    %state,
                    error = %error_chain(&err),
                    "failed to set light state"
                );
                return ControlOutcome::Failed(err);
            }
        };

        tracing::info!(%state, %reply, "light state accepted");
        let refresh = self.refresh_metric(&LIGHT_STATE).await;
        ControlOutcome::Applied { reply, refresh }
    }

    async fn fetch_text(&self, endpoint: &str) -> Result<String, PicoventError> {
        let response = self.transport.get(endpoint).await?;
        let response = check_status(endpoint, response)?;
        let value: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|source| PicoventError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Ok(display_text(&value))
    }

    async fn put_light_state(
        &self,
        endpoint: &str,
        state: &LightState,
    ) -> Result<String, PicoventError> {
        let response = self
            .transport
            .put_form(endpoint, &state.form_pairs())
            .await?;
        Ok(check_status(endpoint, response)?.body)
    }
}

fn check_status(endpoint: &str, response: HttpResponse) -> Result<HttpResponse, PicoventError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(PicoventError::Status {
            endpoint: endpoint.to_string(),
            status: response.status,
        })
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
