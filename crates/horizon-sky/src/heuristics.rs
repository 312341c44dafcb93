use horizon_core::constants::{LIGHT_POLLUTION_DEFAULT, TURBIDITY_MAX};
use horizon_core::{AtmosphericParameters, Influences};

use crate::boundary::{AirQualitySample, WeatherSample};

/// Derive the atmospheric parameter set from influence toggles and optional
/// external readings.
///
/// This is the single place that decides "is this effect on and do we have
/// data": the scattering engine downstream always receives a fully
/// populated, in-domain parameter set. Disabled influences use their
/// neutral defaults even when a reading is present; readings are mapped
/// through fixed saturating transforms, never passed through unclamped.
pub fn derive_atmosphere(
    influences: &Influences,
    weather: Option<&WeatherSample>,
    air_quality: Option<&AirQualitySample>,
) -> AtmosphericParameters {
    let mut params = AtmosphericParameters::default();

    if influences.weather {
        if let Some(sample) = weather {
            if !(0.0..=1.0).contains(&sample.cloud_cover) {
                log::warn!(
                    "cloud cover {} outside [0, 1], clamping",
                    sample.cloud_cover
                );
            }
            params.overcast = sample.cloud_cover.clamp(0.0, 1.0);

            // Near-saturated air hazes: boost turbidity above 70% RH,
            // capped at the hazy-sky maximum.
            let rh = sample.rel_humidity.clamp(0.0, 1.0);
            if rh > 0.7 {
                let boost = ((rh - 0.7) * 1.2).min(0.5);
                params.turbidity = (params.turbidity + boost).min(TURBIDITY_MAX);
            }
        }
    }

    if influences.air_quality {
        if let Some(sample) = air_quality {
            // AQI <= 50 is clean; attenuation rolls off linearly to 0.4
            // at AQI >= 300.
            let strength = ((sample.aqi - 50.0) / 250.0).clamp(0.0, 1.0);
            params.air_quality = 1.0 - 0.6 * strength;
        }
    }

    if influences.light_pollution {
        params.light_pollution = influences
            .light_pollution_level
            .unwrap_or(LIGHT_POLLUTION_DEFAULT)
            .max(0.0);
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(cloud_cover: f64, rel_humidity: f64) -> WeatherSample {
        WeatherSample {
            cloud_cover,
            rel_humidity,
            temperature_c: 15.0,
        }
    }

    #[test]
    fn test_all_disabled_yields_neutral_defaults() {
        let params = derive_atmosphere(
            &Influences::none(),
            Some(&weather(0.9, 0.95)),
            Some(&AirQualitySample { aqi: 400.0 }),
        );
        assert_eq!(params, AtmosphericParameters::default());
    }

    #[test]
    fn test_missing_readings_yield_neutral_defaults() {
        let params = derive_atmosphere(&Influences::default(), None, None);
        assert_eq!(params.overcast, 0.0);
        assert_eq!(params.turbidity, 2.2);
        assert_eq!(params.air_quality, 1.0);
        // Light pollution has no external source: toggle alone enables it.
        assert_eq!(params.light_pollution, LIGHT_POLLUTION_DEFAULT);
    }

    #[test]
    fn test_cloud_cover_maps_to_overcast() {
        let params = derive_atmosphere(&Influences::default(), Some(&weather(0.65, 0.4)), None);
        assert_eq!(params.overcast, 0.65);
        assert_eq!(params.turbidity, 2.2); // dry air, no haze boost
    }

    #[test]
    fn test_cloud_cover_clamped() {
        let params = derive_atmosphere(&Influences::default(), Some(&weather(1.7, 0.0)), None);
        assert_eq!(params.overcast, 1.0);
        let params = derive_atmosphere(&Influences::default(), Some(&weather(-0.2, 0.0)), None);
        assert_eq!(params.overcast, 0.0);
    }

    #[test]
    fn test_humidity_boosts_turbidity_saturating() {
        let dry = derive_atmosphere(&Influences::default(), Some(&weather(0.0, 0.5)), None);
        assert_eq!(dry.turbidity, 2.2);

        let humid = derive_atmosphere(&Influences::default(), Some(&weather(0.0, 0.8)), None);
        assert!((humid.turbidity - 2.32).abs() < 1e-12);

        let saturated = derive_atmosphere(&Influences::default(), Some(&weather(0.0, 1.0)), None);
        assert!((saturated.turbidity - 2.56).abs() < 1e-12);
        assert!(saturated.turbidity <= TURBIDITY_MAX);
    }

    #[test]
    fn test_aqi_transform_saturates() {
        let clean = derive_atmosphere(
            &Influences::default(),
            None,
            Some(&AirQualitySample { aqi: 30.0 }),
        );
        assert_eq!(clean.air_quality, 1.0);

        let moderate = derive_atmosphere(
            &Influences::default(),
            None,
            Some(&AirQualitySample { aqi: 175.0 }),
        );
        assert!((moderate.air_quality - 0.7).abs() < 1e-12);

        let hazardous = derive_atmosphere(
            &Influences::default(),
            None,
            Some(&AirQualitySample { aqi: 480.0 }),
        );
        assert!((hazardous.air_quality - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_light_pollution_level_override() {
        let influences = Influences {
            light_pollution_level: Some(0.9),
            ..Influences::default()
        };
        let params = derive_atmosphere(&influences, None, None);
        assert_eq!(params.light_pollution, 0.9);

        // Negative overrides floor at zero rather than poisoning the engine.
        let influences = Influences {
            light_pollution_level: Some(-1.0),
            ..Influences::default()
        };
        let params = derive_atmosphere(&influences, None, None);
        assert_eq!(params.light_pollution, 0.0);
    }

    #[test]
    fn test_output_always_validates() {
        let worst = derive_atmosphere(
            &Influences::default(),
            Some(&weather(2.0, 1.5)),
            Some(&AirQualitySample { aqi: 9999.0 }),
        );
        assert!(worst.validate().is_ok());
    }
}
