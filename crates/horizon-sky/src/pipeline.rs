use chrono::{DateTime, Utc};
use horizon_core::constants::GRADIENT_STOPS;
use horizon_core::{GeoCoordinate, Influences, SkyError, SkySnapshot};

use crate::boundary::{AirQualityProvider, AirQualitySample, WeatherProvider, WeatherSample};
use crate::{gradient, heuristics, regime, scattering, solar};

/// Default viewing set: `GRADIENT_STOPS` zenith angles evenly spaced from
/// straight up to the horizon.
pub fn default_view_angles() -> Vec<f64> {
    (0..GRADIENT_STOPS)
        .map(|i| 90.0 * i as f64 / (GRADIENT_STOPS - 1) as f64)
        .collect()
}

/// Compute a complete sky snapshot for one instant and place.
///
/// Stages run in dependency order: solar position, regime, heuristics,
/// scattering, gradient. The first failure propagates unchanged; no partial
/// snapshot is ever returned. Identical inputs produce a bit-identical
/// snapshot.
pub fn compute_sky(
    timestamp: DateTime<Utc>,
    coordinate: GeoCoordinate,
    influences: &Influences,
    weather: Option<&WeatherSample>,
    air_quality: Option<&AirQualitySample>,
) -> Result<SkySnapshot, SkyError> {
    let sun = solar::solar_position(timestamp, &coordinate);
    let regime = regime::classify(sun.altitude_deg);
    let atmosphere = heuristics::derive_atmosphere(influences, weather, air_quality);
    let samples = scattering::compute_scattering(&sun, &atmosphere, &default_view_angles())?;
    let stops = gradient::to_gradient(&samples, &atmosphere);

    log::debug!(
        "sky at ({:.2}, {:.2}) {timestamp}: altitude {:.2}, azimuth {:.2}, {}",
        coordinate.lat_deg(),
        coordinate.lon_deg(),
        sun.altitude_deg,
        sun.azimuth_deg,
        regime.label(),
    );

    Ok(SkySnapshot {
        timestamp,
        coordinate,
        sun,
        regime,
        atmosphere,
        stops,
    })
}

/// Use-case wrapper bundling influence toggles with the optional provider
/// boundaries. Providers are queried once per run; a `None` reading falls
/// back to the neutral defaults inside the heuristics.
pub struct SkyComputation {
    influences: Influences,
    weather: Option<Box<dyn WeatherProvider>>,
    air_quality: Option<Box<dyn AirQualityProvider>>,
}

impl SkyComputation {
    pub fn new(influences: Influences) -> Self {
        Self {
            influences,
            weather: None,
            air_quality: None,
        }
    }

    pub fn with_weather(mut self, provider: Box<dyn WeatherProvider>) -> Self {
        self.weather = Some(provider);
        self
    }

    pub fn with_air_quality(mut self, provider: Box<dyn AirQualityProvider>) -> Self {
        self.air_quality = Some(provider);
        self
    }

    pub fn run(
        &self,
        timestamp: DateTime<Utc>,
        coordinate: GeoCoordinate,
    ) -> Result<SkySnapshot, SkyError> {
        let weather = self.weather.as_ref().and_then(|p| p.sample(&coordinate));
        let air_quality = self
            .air_quality
            .as_ref()
            .and_then(|p| p.sample(&coordinate));
        compute_sky(
            timestamp,
            coordinate,
            &self.influences,
            weather.as_ref(),
            air_quality.as_ref(),
        )
    }

    /// Run from raw unix seconds; rejects non-finite time.
    pub fn run_at(
        &self,
        unix_seconds: f64,
        coordinate: GeoCoordinate,
    ) -> Result<SkySnapshot, SkyError> {
        let timestamp = solar::timestamp_from_unix(unix_seconds)?;
        self.run(timestamp, coordinate)
    }
}
