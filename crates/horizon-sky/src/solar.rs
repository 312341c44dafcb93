//! Solar position from the NOAA low-precision formulas: equation of time
//! and declination as trigonometric series in the fractional year, true
//! solar time from longitude, then altitude/azimuth over the spherical
//! triangle. Accurate to a few tenths of a degree for dates within a few
//! centuries of J2000, which is ample for sky color.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, Timelike, Utc};
use horizon_core::{GeoCoordinate, SkyError, SolarPosition};

fn days_in_year(year: i32) -> f64 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    if leap {
        366.0
    } else {
        365.0
    }
}

/// Convert fractional unix seconds into a UTC timestamp.
///
/// Defensive boundary for callers holding raw time scalars; non-finite or
/// unrepresentable input is `InvalidTimestamp`.
pub fn timestamp_from_unix(seconds: f64) -> Result<DateTime<Utc>, SkyError> {
    if !seconds.is_finite() {
        return Err(SkyError::InvalidTimestamp(format!(
            "non-finite unix seconds: {seconds}"
        )));
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::<Utc>::from_timestamp(whole as i64, nanos).ok_or_else(|| {
        SkyError::InvalidTimestamp(format!("unix seconds out of range: {seconds}"))
    })
}

/// Compute sun altitude/azimuth for a UTC timestamp and coordinate.
///
/// Pure and total: every valid timestamp yields a position with altitude in
/// [-90, 90] and azimuth in [0, 360) clockwise from north.
pub fn solar_position(timestamp: DateTime<Utc>, coordinate: &GeoCoordinate) -> SolarPosition {
    let clock_hours = timestamp.hour() as f64
        + timestamp.minute() as f64 / 60.0
        + (timestamp.second() as f64 + timestamp.nanosecond() as f64 * 1e-9) / 3600.0;

    // Fractional year in radians, phase-locked to Jan 1.
    let gamma = TAU / days_in_year(timestamp.year())
        * (timestamp.ordinal() as f64 - 1.0 + (clock_hours - 12.0) / 24.0);

    // Equation of time in minutes.
    let eqtime_min = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());

    // Solar declination in radians.
    let decl = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    // True solar time (minutes) and hour angle, normalized to [-180, 180).
    let tst_min = clock_hours * 60.0 + eqtime_min + 4.0 * coordinate.lon_deg();
    let ha_deg = (tst_min / 4.0).rem_euclid(360.0) - 180.0;
    let ha = ha_deg.to_radians();

    let lat = coordinate.lat_deg().to_radians();
    let sin_alt =
        (lat.sin() * decl.sin() + lat.cos() * decl.cos() * ha.cos()).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();

    // Spherical-triangle azimuth, quadrant resolved by the hour-angle sign.
    // Degenerate at the poles and with the sun at the zenith, where every
    // azimuth is equivalent; fall back to due south.
    let zenith = std::f64::consts::FRAC_PI_2 - alt;
    let denom = lat.cos() * zenith.sin();
    let azimuth_deg = if denom.abs() < 1e-9 {
        180.0
    } else {
        let cos_az = ((decl.sin() - lat.sin() * zenith.cos()) / denom).clamp(-1.0, 1.0);
        let az = cos_az.acos().to_degrees();
        if ha_deg > 0.0 {
            (360.0 - az).rem_euclid(360.0)
        } else {
            az
        }
    };

    SolarPosition {
        altitude_deg: alt.to_degrees(),
        azimuth_deg,
    }
}
