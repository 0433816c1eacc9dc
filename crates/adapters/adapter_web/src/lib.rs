//! # picovent-adapter-web
//!
//! Status page client compiled to WebAssembly.
//!
//! Loading the module refreshes every metric of the built-in binding table as
//! soon as the DOM is ready. The hosting page provides one element per metric
//! (`<span id="fan_speed"></span>`, …); missing elements are skipped.
//!
//! Page scripts and buttons call the exported functions:
//!
//! ```javascript
//! setLightState("on");
//! refreshMetric("battery_voltage", "/api/battery/voltage");
//! ```
//!
//! Failures only show up in the browser console.

pub mod document;
pub mod transport;

use picovent_app::services::metric_service::MetricService;
use picovent_domain::binding::{DEFAULT_BINDINGS, MetricBinding};
use picovent_domain::light::LightState;
use tracing_wasm::{WASMLayerConfig, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use document::BrowserDocument;
use transport::FetchTransport;

type PageService = MetricService<FetchTransport, BrowserDocument>;

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(console_config());

    let Some(document) = BrowserDocument::current() else {
        tracing::warn!("no window document, status refresh skipped");
        return;
    };
    document.clone().when_loaded(move || {
        let service = MetricService::new(FetchTransport, document);
        spawn_local(async move {
            service.refresh_all(&DEFAULT_BINDINGS).await;
        });
    });
}

/// Fetch one endpoint and show its value in the element with `element_id`.
///
/// `endpoint` may be absolute (`/api/fan/speed`) or relative to the page URL
/// (`api/fan/speed`); it is passed to `fetch` unchanged. Empty arguments are
/// logged and ignored.
#[wasm_bindgen(js_name = refreshMetric)]
pub fn refresh_metric(element_id: String, endpoint: String) {
    let binding = match MetricBinding::for_page(element_id, endpoint) {
        Ok(binding) => binding,
        Err(err) => {
            tracing::error!(error = %err, "invalid metric binding");
            return;
        }
    };
    let Some(service) = page_service() else {
        return;
    };
    spawn_local(async move {
        service.refresh_metric(&binding).await;
    });
}

/// Switch the device light, then show the state the device reports.
#[wasm_bindgen(js_name = setLightState)]
pub fn set_light_state(state: String) {
    let state = match LightState::new(state) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "invalid light state");
            return;
        }
    };
    let Some(service) = page_service() else {
        return;
    };
    spawn_local(async move {
        service.set_light_state(&state).await;
    });
}

/// Browser console logging: `INFO` and above, without performance marks.
fn console_config() -> WASMLayerConfig {
    WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .set_report_logs_in_timings(false)
        .build()
}

fn page_service() -> Option<PageService> {
    match BrowserDocument::current() {
        Some(document) => Some(MetricService::new(FetchTransport, document)),
        None => {
            tracing::warn!("no window document, request skipped");
            None
        }
    }
}
