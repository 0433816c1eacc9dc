//! Metric bindings — which display element shows which device endpoint.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pairs a display element id with the device endpoint that feeds it.
///
/// Bindings are declared once at startup (either the built-in
/// [`DEFAULT_BINDINGS`] table or a configured replacement) and live for the
/// whole process. The endpoint is read with `GET`; only [`LIGHT_STATE`] is
/// also written with `PUT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricBinding {
    element_id: Cow<'static, str>,
    endpoint: Cow<'static, str>,
}

impl MetricBinding {
    /// Build a binding from string literals, usable in `const` context.
    ///
    /// No validation happens here; see [`MetricBinding::new`].
    #[must_use]
    pub const fn from_static(element_id: &'static str, endpoint: &'static str) -> Self {
        Self {
            element_id: Cow::Borrowed(element_id),
            endpoint: Cow::Borrowed(endpoint),
        }
    }

    /// Build a validated binding from runtime values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either field is empty or the endpoint
    /// is not an absolute path.
    pub fn new(
        element_id: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let binding = Self {
            element_id: Cow::Owned(element_id.into()),
            endpoint: Cow::Owned(endpoint.into()),
        };
        binding.validate()?;
        Ok(binding)
    }

    /// Build a binding for a page script, where the browser resolves the
    /// endpoint against the page URL.
    ///
    /// Unlike [`MetricBinding::new`], relative endpoints such as
    /// `api/fan/speed` are kept as given. Such bindings only make sense for a
    /// transport that resolves URLs the way `fetch` does.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either field is empty.
    pub fn for_page(
        element_id: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let binding = Self {
            element_id: Cow::Owned(element_id.into()),
            endpoint: Cow::Owned(endpoint.into()),
        };
        match binding.validate() {
            Ok(()) | Err(ValidationError::RelativeEndpoint(_)) => Ok(binding),
            Err(err) => Err(err),
        }
    }

    /// Check the binding invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.element_id.trim().is_empty() {
            return Err(ValidationError::EmptyElementId);
        }
        if self.endpoint.trim().is_empty() {
            return Err(ValidationError::EmptyEndpoint);
        }
        if !self.endpoint.starts_with('/') {
            return Err(ValidationError::RelativeEndpoint(self.endpoint.to_string()));
        }
        Ok(())
    }

    /// Id of the display element updated by this binding.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Device endpoint path, relative to the device origin.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Display for MetricBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.element_id, self.endpoint)
    }
}

pub const INDOOR_HUMIDITY: MetricBinding =
    MetricBinding::from_static("indoor_humidity", "/api/fan/indoor_humidity");
pub const OUTDOOR_HUMIDITY: MetricBinding =
    MetricBinding::from_static("outdoor_humidity", "/api/fan/outdoor_humidity");
pub const FAN_SPEED: MetricBinding = MetricBinding::from_static("fan_speed", "/api/fan/speed");
pub const BATTERY_VOLTAGE: MetricBinding =
    MetricBinding::from_static("battery_voltage", "/api/battery/voltage");
pub const LIGHT_BRIGHTNESS: MetricBinding =
    MetricBinding::from_static("light_brightness", "/api/light/brightness");
/// Light state; its endpoint also accepts `PUT` to change the state.
pub const LIGHT_STATE: MetricBinding =
    MetricBinding::from_static("light_state", "/api/light/state");
pub const MOTION_STATE: MetricBinding =
    MetricBinding::from_static("motion_state", "/api/motion/state");
pub const MAC_ADDRESS: MetricBinding = MetricBinding::from_static("mac_address", "/api/wlan/mac");

/// Every metric refreshed when the status page loads.
pub static DEFAULT_BINDINGS: [MetricBinding; 8] = [
    INDOOR_HUMIDITY,
    OUTDOOR_HUMIDITY,
    FAN_SPEED,
    BATTERY_VOLTAGE,
    LIGHT_BRIGHTNESS,
    LIGHT_STATE,
    MOTION_STATE,
    MAC_ADDRESS,
];

/// Look up a binding by its element id.
#[must_use]
pub fn find_binding<'a>(bindings: &'a [MetricBinding], element_id: &str) -> Option<&'a MetricBinding> {
    bindings.iter().find(|b| b.element_id() == element_id)
}
