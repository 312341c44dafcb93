//! Single-scattering sky radiance over a spherical-shell atmosphere.
//!
//! Physical model and media parameters follow "A Scalable and Production
//! Ready Sky and Atmosphere Rendering Technique" (Sebastien Hillaire), with
//! the march structure of Andrew Helmer's "Production Sky Rendering".
//!
//! Two particle populations are integrated: Rayleigh (molecular, strongly
//! wavelength-dependent) and Mie (aerosol, forward-peaked, scaled by
//! turbidity relative to the clear-sky baseline), plus ozone absorption.
//! View rays lie in the sun's vertical plane, so the horizon-ward stop
//! faces the sun and picks up the forward Mie peak at sunset.

use std::f64::consts::PI;

use glam::DVec3;
use horizon_core::constants::{
    GRAZING_EPSILON_RAD, GROUND_RADIUS_M, INTEGRATION_STEPS, MIE_ABSORB, MIE_ANISOTROPY,
    MIE_SCALE_HEIGHT_M, MIE_SCATTER, OZONE_ABSORB, OZONE_CENTER_M, OZONE_HALF_WIDTH_M,
    RAYLEIGH_SCALE_HEIGHT_M, RAYLEIGH_SCATTER, SUN_INTENSITY, TOP_RADIUS_M, TURBIDITY_BASELINE,
};
use horizon_core::{
    AtmosphericParameters, LinearRgb, OpticalDepth, ScatteringSample, SkyError, SolarPosition,
};

/// Ray/sphere intersection distance, sphere centered at the origin.
/// From "Real-Time Collision Detection" 5.3.2. Returns the far hit when the
/// origin is inside the sphere.
fn intersect_sphere(origin: DVec3, dir: DVec3, radius: f64) -> Option<f64> {
    let b = origin.dot(dir);
    let c = origin.dot(origin) - radius * radius;
    let discr = b * b - c;
    if discr < 0.0 {
        return None;
    }
    let sq = discr.sqrt();
    let t = -b - sq;
    if t < 0.0 {
        return Some(-b + sq);
    }
    Some(t)
}

/// Exponential falloff with altitude. Heights below ground (float jitter at
/// the camera) are treated as sea level rather than letting the exponent blow up.
fn rayleigh_density(height: f64) -> f64 {
    (-height.max(0.0) / RAYLEIGH_SCALE_HEIGHT_M).exp()
}

fn mie_density(height: f64) -> f64 {
    (-height.max(0.0) / MIE_SCALE_HEIGHT_M).exp()
}

/// Triangular ozone profile centered at 25 km.
fn ozone_density(height: f64) -> f64 {
    1.0 - ((height - OZONE_CENTER_M).abs() / OZONE_HALF_WIDTH_M).min(1.0)
}

fn rayleigh_phase(angle: f64) -> f64 {
    let cos_a = angle.cos();
    3.0 * (1.0 + cos_a * cos_a) / (16.0 * PI)
}

/// Cornette-Shanks style forward-peaked aerosol phase function.
fn mie_phase(angle: f64) -> f64 {
    let g = MIE_ANISOTROPY;
    let cos_a = angle.cos();
    let num = (1.0 - g * g) * (1.0 + cos_a * cos_a);
    let denom = (2.0 + g * g) * (1.0 + g * g - 2.0 * g * cos_a).powf(1.5);
    (3.0 / (8.0 * PI)) * num / denom
}

/// The participating medium for one computation: Mie density scaled by
/// turbidity relative to the clear-sky baseline.
struct Medium {
    mie_scale: f64,
}

impl Medium {
    fn new(turbidity: f64) -> Self {
        Self {
            mie_scale: turbidity / TURBIDITY_BASELINE,
        }
    }

    /// Beer-Lambert transmittance from `height` above ground out to space,
    /// along a ray tilted `angle` radians off local up. Fixed-step march.
    ///
    /// The angle is clamped away from 0 and pi so grazing geometry stays
    /// finite; output is continuous through both substitutions.
    fn transmittance(&self, height: f64, angle: f64) -> DVec3 {
        let angle = angle.clamp(GRAZING_EPSILON_RAD, PI - GRAZING_EPSILON_RAD);
        let origin = DVec3::new(0.0, GROUND_RADIUS_M + height, 0.0);
        let dir = DVec3::new(angle.sin(), angle.cos(), 0.0);

        let distance = match intersect_sphere(origin, dir, TOP_RADIUS_M) {
            Some(d) if d > 0.0 => d,
            _ => return DVec3::ONE,
        };

        let ds = distance / INTEGRATION_STEPS as f64;
        let mut t = 0.5 * ds;
        let mut od_rayleigh = 0.0;
        let mut od_mie = 0.0;
        let mut od_ozone = 0.0;
        for _ in 0..INTEGRATION_STEPS {
            let h = (origin + dir * t).length() - GROUND_RADIUS_M;
            od_rayleigh += rayleigh_density(h) * ds;
            od_mie += self.mie_scale * mie_density(h) * ds;
            od_ozone += ozone_density(h) * ds;
            t += ds;
        }

        let tau = DVec3::new(
            RAYLEIGH_SCATTER[0] * od_rayleigh + MIE_ABSORB * od_mie + OZONE_ABSORB[0] * od_ozone,
            RAYLEIGH_SCATTER[1] * od_rayleigh + MIE_ABSORB * od_mie + OZONE_ABSORB[1] * od_ozone,
            RAYLEIGH_SCATTER[2] * od_rayleigh + MIE_ABSORB * od_mie + OZONE_ABSORB[2] * od_ozone,
        );
        DVec3::new((-tau.x).exp(), (-tau.y).exp(), (-tau.z).exp())
    }

    /// In-scattered radiance along one view ray from the ground camera.
    fn march(&self, zenith_angle_deg: f64, sun_dir: DVec3, attenuation: f64) -> ScatteringSample {
        let zenith_rad = zenith_angle_deg.to_radians();
        let camera = DVec3::new(0.0, GROUND_RADIUS_M, 0.0);
        let view_dir = DVec3::new(zenith_rad.sin(), zenith_rad.cos(), 0.0);

        let mut inscattered = DVec3::ZERO;
        let mut depth = OpticalDepth {
            rayleigh: 0.0,
            mie: 0.0,
            ozone: 0.0,
        };

        let t_exit = intersect_sphere(camera, view_dir, TOP_RADIUS_M).filter(|t| *t > 0.0);
        if let Some(t_exit) = t_exit {
            let ds = t_exit / INTEGRATION_STEPS as f64;
            let mut t_ray = 0.5 * ds;

            // Camera-to-space transmittance and ray polarity, fixed for the
            // whole march: camera-to-sample transmittance is recovered as a
            // ratio of to-space transmittances.
            let camera_radius = camera.length();
            let downward = camera.dot(view_dir) / camera_radius < 0.0;
            let start_height = camera_radius - GROUND_RADIUS_M;
            let start_cos = (camera / camera_radius).dot(view_dir).clamp(-1.0, 1.0);
            let t_camera_space = self.transmittance(start_height, start_cos.abs().acos());

            // The sun/view separation is constant along the ray.
            let sun_view_cos = sun_dir.dot(view_dir).clamp(-1.0, 1.0);
            let phase_r = rayleigh_phase(sun_view_cos.acos());
            let phase_m = mie_phase(sun_view_cos.acos());

            for _ in 0..INTEGRATION_STEPS {
                let pos = camera + view_dir * t_ray;
                let radius = pos.length();
                let up = pos / radius;
                let height = radius - GROUND_RADIUS_M;

                let view_cos = up.dot(view_dir).clamp(-1.0, 1.0);
                let sun_cos = up.dot(sun_dir).clamp(-1.0, 1.0);

                let t_to_space = self.transmittance(height, view_cos.abs().acos());
                let t_camera_sample = if downward {
                    t_to_space / t_camera_space
                } else {
                    t_camera_space / t_to_space
                };
                let t_light = self.transmittance(height, sun_cos.acos());

                let d_rayleigh = rayleigh_density(height);
                let d_mie = self.mie_scale * mie_density(height);
                depth.rayleigh += d_rayleigh * ds;
                depth.mie += d_mie * ds;
                depth.ozone += ozone_density(height) * ds;

                let scattered = DVec3::new(
                    RAYLEIGH_SCATTER[0] * d_rayleigh * phase_r + MIE_SCATTER * d_mie * phase_m,
                    RAYLEIGH_SCATTER[1] * d_rayleigh * phase_r + MIE_SCATTER * d_mie * phase_m,
                    RAYLEIGH_SCATTER[2] * d_rayleigh * phase_r + MIE_SCATTER * d_mie * phase_m,
                );

                inscattered += t_camera_sample * t_light * scattered * ds;
                t_ray += ds;
            }

            inscattered *= SUN_INTENSITY * attenuation;
        }

        ScatteringSample {
            zenith_angle_deg,
            radiance: LinearRgb::new(
                inscattered.x.max(0.0),
                inscattered.y.max(0.0),
                inscattered.z.max(0.0),
            ),
            optical_depth: depth,
        }
    }
}

/// Compute one `ScatteringSample` per requested viewing zenith angle, in
/// the requested order. Angles are clamped into [0, 90] (the camera sits on
/// the ground; there is no below-horizon geometry).
///
/// Fails only if the parameter set is out of domain, which the heuristics
/// layer makes unreachable.
pub fn compute_scattering(
    sun: &SolarPosition,
    atmosphere: &AtmosphericParameters,
    zenith_angles_deg: &[f64],
) -> Result<Vec<ScatteringSample>, SkyError> {
    atmosphere.validate()?;

    let medium = Medium::new(atmosphere.turbidity);
    let sun_alt_rad = sun.altitude_deg.to_radians();
    let sun_dir = DVec3::new(sun_alt_rad.cos(), sun_alt_rad.sin(), 0.0);

    Ok(zenith_angles_deg
        .iter()
        .map(|&angle| medium.march(angle.clamp(0.0, 90.0), sun_dir, atmosphere.air_quality))
        .collect())
}
