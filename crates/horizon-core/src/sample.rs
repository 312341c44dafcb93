use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::LinearRgb;
use crate::types::{AtmosphericParameters, GeoCoordinate, Regime, SolarPosition};

/// Path-integrated relative densities (density x meters) along a view ray.
/// Multiply by the per-channel media coefficients for Beer-Lambert tau.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalDepth {
    pub rayleigh: f64,
    pub mie: f64,
    pub ozone: f64,
}

/// In-scattered radiance for one viewing direction, plus the optical depth
/// that produced it. Ephemeral: recomputed on every call, never cached here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatteringSample {
    /// Viewing zenith angle in degrees; 0 looks straight up, 90 at the horizon.
    pub zenith_angle_deg: f64,
    /// Linear-RGB radiance, non-negative, unbounded above.
    pub radiance: LinearRgb,
    pub optical_depth: OpticalDepth,
}

/// One stop of the displayable sky gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Viewing-angle fraction: 0 at the zenith, 1 at the horizon.
    pub fraction: f64,
    /// Tone-mapped linear-RGB color, channels in [0, 1].
    pub color: LinearRgb,
    /// sRGB encoding of `color` as `#RRGGBB`.
    pub hex: String,
}

/// Complete output of one sky computation. Immutable value object; the
/// coordinate is stored as used (any privacy rounding is the caller's).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkySnapshot {
    pub timestamp: DateTime<Utc>,
    pub coordinate: GeoCoordinate,
    pub sun: SolarPosition,
    pub regime: Regime,
    pub atmosphere: AtmosphericParameters,
    /// Ordered zenith-to-horizon gradient stops.
    pub stops: Vec<GradientStop>,
}
