//! `application/x-www-form-urlencoded` body encoding.

use std::fmt::Write;

/// Content type sent with every control request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode key/value pairs as a form body (`k1=v1&k2=v2`).
#[must_use]
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode one form component: unreserved bytes pass through, space
/// becomes `+`, everything else is `%XX`.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(char::from(byte));
            }
            b' ' => out.push('+'),
            other => {
                let _ = write!(out, "%{other:02X}");
            }
        }
    }
    out
}
