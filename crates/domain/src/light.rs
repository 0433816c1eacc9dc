//! Light state — the value written when switching the device light.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::encode_form;

/// Form field carrying the requested state.
pub const STATE_FIELD: &str = "state";

/// Requested light state.
///
/// The device decides what values it accepts; the client only guarantees the
/// value is non-empty. [`LightState::on`] and [`LightState::off`] cover the
/// common case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LightState(String);

impl LightState {
    /// Create a light state from any non-empty value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyLightState`] for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyLightState);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn on() -> Self {
        Self("on".to_string())
    }

    #[must_use]
    pub fn off() -> Self {
        Self("off".to_string())
    }

    /// The raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form pairs for the control request.
    #[must_use]
    pub fn form_pairs(&self) -> [(&'static str, &str); 1] {
        [(STATE_FIELD, self.as_str())]
    }

    /// Encoded request body, e.g. `state=on`.
    #[must_use]
    pub fn form_body(&self) -> String {
        encode_form(&self.form_pairs())
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LightState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LightState {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LightState> for String {
    fn from(state: LightState) -> Self {
        state.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_on_body() {
        assert_eq!(LightState::on().form_body(), "state=on");
    }

    #[test]
    fn should_build_off_body() {
        assert_eq!(LightState::off().form_body(), "state=off");
    }

    #[test]
    fn should_keep_custom_values_opaque() {
        let state: LightState = "auto".parse().unwrap();
        assert_eq!(state.as_str(), "auto");
        assert_eq!(state.form_pairs(), [("state", "auto")]);
    }

    #[test]
    fn should_reject_blank_state() {
        assert_eq!(LightState::new(" "), Err(ValidationError::EmptyLightState));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&LightState::on()).unwrap();
        assert_eq!(json, "\"on\"");
        let parsed: LightState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LightState::on());
    }

    #[test]
    fn should_reject_blank_state_when_deserializing() {
        let result = serde_json::from_str::<LightState>("\"\"");
        assert!(result.is_err());
    }
}
