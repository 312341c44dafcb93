use horizon_core::Influences;
use serde::{Deserialize, Serialize};

use crate::error::PrefsError;

/// The recognized preferences document.
///
/// `update_seconds`, `location_precision_deg` and `exact_time` are carried
/// for the scheduler/location layer and never interpreted here; the three
/// `influence_*` toggles and the optional glow level gate the atmospheric
/// heuristics. Unknown keys are ignored on load, missing keys defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub update_seconds: u32,
    pub location_precision_deg: f64,
    pub influence_weather: bool,
    pub influence_air_quality: bool,
    pub influence_light_pollution: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_pollution_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_time: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            update_seconds: 900,
            location_precision_deg: 0.25,
            influence_weather: true,
            influence_air_quality: true,
            influence_light_pollution: true,
            light_pollution_level: None,
            exact_time: None,
        }
    }
}

impl Preferences {
    /// Parse and validate a preferences JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, PrefsError> {
        let prefs: Self =
            serde_json::from_str(json).map_err(|e| PrefsError::Parse(e.to_string()))?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Serialize back to a pretty JSON string for the prefs file.
    pub fn to_json_string(&self) -> Result<String, PrefsError> {
        serde_json::to_string_pretty(self).map_err(|e| PrefsError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), PrefsError> {
        if self.update_seconds < 1 {
            return Err(PrefsError::OutOfRange {
                name: "update_seconds",
                value: self.update_seconds as f64,
            });
        }
        if !(self.location_precision_deg > 0.0) || !self.location_precision_deg.is_finite() {
            return Err(PrefsError::OutOfRange {
                name: "location_precision_deg",
                value: self.location_precision_deg,
            });
        }
        if let Some(level) = self.light_pollution_level {
            if !(level >= 0.0) || !level.is_finite() {
                return Err(PrefsError::OutOfRange {
                    name: "light_pollution_level",
                    value: level,
                });
            }
        }
        Ok(())
    }

    /// Project the toggles into the core influence configuration.
    pub fn influences(&self) -> Influences {
        Influences {
            weather: self.influence_weather,
            air_quality: self.influence_air_quality,
            light_pollution: self.influence_light_pollution,
            light_pollution_level: self.light_pollution_level,
        }
    }
}

/// Round a coordinate to the nearest multiple of `step` degrees (privacy
/// rounding for the location layer). Non-positive steps pass the value
/// through unchanged.
pub fn round_coord(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}
