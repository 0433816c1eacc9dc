//! # picovent-domain
//!
//! Pure domain model for the picovent status client.
//!
//! ## Responsibilities
//! - Define **metric bindings** (display element id ↔ device endpoint) and the
//!   built-in binding table
//! - Define the **light state** sent when toggling the light
//! - Coerce opaque JSON metric values into their displayed text
//! - Encode `application/x-www-form-urlencoded` request bodies
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod binding;
pub mod display;
pub mod error;
pub mod form;
pub mod light;
