//! # picovent-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HttpTransport` — `GET` and form `PUT` against the device origin
//!   - `Document` — the display surface holding one text element per metric
//! - Define the **driving/inbound** use-case:
//!   - `MetricService` — refresh one metric, refresh every metric, set the light
//!
//! ## Dependency rule
//! Depends on `picovent-domain` only (plus `futures` for combinators).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Execution model
//! Every port future is driven on a single thread (the browser event loop or a
//! current-thread runtime), so ports are not required to be `Send`.

pub mod ports;
pub mod services;
