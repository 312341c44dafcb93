use horizon_core::GeoCoordinate;
use serde::{Deserialize, Serialize};

/// One weather reading for a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Cloud-cover fraction in [0, 1].
    pub cloud_cover: f64,
    /// Relative humidity in [0, 1].
    pub rel_humidity: f64,
    pub temperature_c: f64,
}

/// One air-quality reading for a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySample {
    /// EPA-style index, nominally 0-500.
    pub aqi: f64,
}

/// Capability interface for an optional weather source. `None` means no
/// data; the heuristics then fall back to neutral defaults.
pub trait WeatherProvider {
    fn sample(&self, coordinate: &GeoCoordinate) -> Option<WeatherSample>;
}

/// Capability interface for an optional air-quality source.
pub trait AirQualityProvider {
    fn sample(&self, coordinate: &GeoCoordinate) -> Option<AirQualitySample>;
}
