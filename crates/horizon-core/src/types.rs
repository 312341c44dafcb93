use serde::{Deserialize, Serialize};

use crate::constants::TURBIDITY_MIN;
use crate::error::SkyError;

/// Validated geographic coordinate in degrees.
///
/// Out-of-range values are rejected at construction, never clamped, so every
/// `GeoCoordinate` the pipeline sees is in-domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    lat_deg: f64,
    lon_deg: f64,
}

impl GeoCoordinate {
    /// Latitude in [-90, 90], longitude in [-180, 180]. NaN is out of range.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self, SkyError> {
        let lat_ok = (-90.0..=90.0).contains(&lat_deg);
        let lon_ok = (-180.0..=180.0).contains(&lon_deg);
        if lat_ok && lon_ok {
            Ok(Self { lat_deg, lon_deg })
        } else {
            Err(SkyError::InvalidCoordinate { lat_deg, lon_deg })
        }
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }
}

/// Sun altitude/azimuth for one timestamp and coordinate. Derived, never
/// mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Degrees above the horizon, in [-90, 90].
    pub altitude_deg: f64,
    /// Degrees clockwise from north, in [0, 360).
    pub azimuth_deg: f64,
}

/// Sky lighting regime, ordered from brightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Regime {
    Day,
    LowSun,
    Civil,
    Nautical,
    Astronomical,
    Night,
}

impl Regime {
    /// Display label used by the menu-bar layer.
    pub fn label(self) -> &'static str {
        match self {
            Regime::Day => "DAY",
            Regime::LowSun => "LOW_SUN",
            Regime::Civil => "CIVIL",
            Regime::Nautical => "NAUTICAL",
            Regime::Astronomical => "ASTRONOMICAL",
            Regime::Night => "NIGHT",
        }
    }
}

/// Fully-populated atmospheric parameter set consumed by the scattering
/// engine. Produced by the heuristics layer, which owns all clamping, so
/// `validate` failures are defensive only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericParameters {
    /// Angstrom-style turbidity coefficient, >= 2.0.
    pub turbidity: f64,
    /// Cloud-cover fraction in [0, 1].
    pub overcast: f64,
    /// Artificial-glow intensity in [0, inf), linear units.
    pub light_pollution: f64,
    /// Air-quality attenuation factor in [0, 1]; 1.0 = no attenuation.
    pub air_quality: f64,
}

impl Default for AtmosphericParameters {
    /// Neutral defaults: clear sky, no clouds, no glow, clean air.
    fn default() -> Self {
        Self {
            turbidity: 2.2,
            overcast: 0.0,
            light_pollution: 0.0,
            air_quality: 1.0,
        }
    }
}

impl AtmosphericParameters {
    pub fn validate(&self) -> Result<(), SkyError> {
        let checks: [(&'static str, f64, bool); 4] = [
            ("turbidity", self.turbidity, self.turbidity >= TURBIDITY_MIN),
            ("overcast", self.overcast, (0.0..=1.0).contains(&self.overcast)),
            (
                "light_pollution",
                self.light_pollution,
                self.light_pollution >= 0.0,
            ),
            (
                "air_quality",
                self.air_quality,
                (0.0..=1.0).contains(&self.air_quality),
            ),
        ];
        for (name, value, ok) in checks {
            if !ok {
                return Err(SkyError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Atmospheric influence toggles from preferences. A disabled influence
/// forces its neutral default even when external data is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Influences {
    pub weather: bool,
    pub air_quality: bool,
    pub light_pollution: bool,
    /// Explicit glow intensity; `None` falls back to the suburban default.
    pub light_pollution_level: Option<f64>,
}

impl Default for Influences {
    fn default() -> Self {
        Self {
            weather: true,
            air_quality: true,
            light_pollution: true,
            light_pollution_level: None,
        }
    }
}

impl Influences {
    /// All influences off: the fully deterministic clear-sky configuration.
    pub fn none() -> Self {
        Self {
            weather: false,
            air_quality: false,
            light_pollution: false,
            light_pollution_level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_in_range_accepted() {
        assert!(GeoCoordinate::new(0.0, 0.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(25.105497, 121.597366).is_ok());
    }

    #[test]
    fn test_coordinate_out_of_range_rejected() {
        for (lat, lon) in [
            (90.01, 0.0),
            (-90.01, 0.0),
            (0.0, 180.01),
            (0.0, -180.01),
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
        ] {
            let result = GeoCoordinate::new(lat, lon);
            assert!(
                matches!(result, Err(SkyError::InvalidCoordinate { .. })),
                "expected rejection for ({lat}, {lon})"
            );
        }
    }

    #[test]
    fn test_regime_ordering_brightest_first() {
        assert!(Regime::Day < Regime::LowSun);
        assert!(Regime::LowSun < Regime::Civil);
        assert!(Regime::Civil < Regime::Nautical);
        assert!(Regime::Nautical < Regime::Astronomical);
        assert!(Regime::Astronomical < Regime::Night);
    }

    #[test]
    fn test_regime_labels() {
        assert_eq!(Regime::Day.label(), "DAY");
        assert_eq!(Regime::LowSun.label(), "LOW_SUN");
        assert_eq!(Regime::Night.label(), "NIGHT");
    }

    #[test]
    fn test_default_parameters_are_neutral_and_valid() {
        let params = AtmosphericParameters::default();
        assert_eq!(params.turbidity, 2.2);
        assert_eq!(params.overcast, 0.0);
        assert_eq!(params.light_pollution, 0.0);
        assert_eq!(params.air_quality, 1.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_parameter_validation_rejects_out_of_domain() {
        let params = AtmosphericParameters {
            turbidity: 1.5,
            ..AtmosphericParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SkyError::InvalidParameter {
                name: "turbidity",
                ..
            })
        ));

        let params = AtmosphericParameters {
            overcast: 1.2,
            ..AtmosphericParameters::default()
        };
        assert!(params.validate().is_err());

        let params = AtmosphericParameters {
            light_pollution: -0.1,
            ..AtmosphericParameters::default()
        };
        assert!(params.validate().is_err());

        let params = AtmosphericParameters {
            air_quality: -0.5,
            ..AtmosphericParameters::default()
        };
        assert!(params.validate().is_err());
    }
}
