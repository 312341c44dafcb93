//! Single source of truth for the physical and rendering constants shared
//! by the scattering engine and the color pipeline.
//!
//! Media coefficients follow the parameterization of "A Scalable and
//! Production Ready Sky and Atmosphere Rendering Technique" (Hillaire).

/// Rayleigh scattering coefficients per channel (m^-1), sampled at
/// representative red/green/blue wavelengths.
pub const RAYLEIGH_SCATTER: [f64; 3] = [5.802e-6, 13.558e-6, 33.1e-6];

/// Mie scattering coefficient (m^-1), wavelength-neutral.
pub const MIE_SCATTER: f64 = 3.996e-6;

/// Mie absorption coefficient (m^-1).
pub const MIE_ABSORB: f64 = 4.44e-6;

/// Ozone absorption coefficients per channel (m^-1).
pub const OZONE_ABSORB: [f64; 3] = [0.65e-6, 1.881e-6, 0.085e-6];

/// Rayleigh density scale height (m).
pub const RAYLEIGH_SCALE_HEIGHT_M: f64 = 8_000.0;

/// Mie density scale height (m).
pub const MIE_SCALE_HEIGHT_M: f64 = 1_200.0;

/// Ozone layer center altitude (m). Density falls off linearly to zero at
/// `OZONE_CENTER_M ± OZONE_HALF_WIDTH_M`.
pub const OZONE_CENTER_M: f64 = 25_000.0;

/// Ozone layer half-width (m).
pub const OZONE_HALF_WIDTH_M: f64 = 15_000.0;

/// Radius of the ground sphere (m).
pub const GROUND_RADIUS_M: f64 = 6_360e3;

/// Radius of the top-of-atmosphere sphere (m).
pub const TOP_RADIUS_M: f64 = 6_460e3;

/// Mie phase function anisotropy (forward-scattering peak).
pub const MIE_ANISOTROPY: f64 = 0.8;

/// Solar radiance scale applied to the in-scattered result.
pub const SUN_INTENSITY: f64 = 1.0;

/// Fixed step count for the optical-depth and in-scattering marches.
/// 8-16 is the sweet spot: fewer steps band the twilight gradient, more
/// only add cost.
pub const INTEGRATION_STEPS: u32 = 12;

/// Number of gradient stops produced for the default zenith-to-horizon
/// viewing set.
pub const GRADIENT_STOPS: usize = 9;

/// Exposure scale applied before tone mapping.
pub const EXPOSURE: f64 = 25.0;

/// Clear-sky baseline turbidity. Mie density scales relative to this.
pub const TURBIDITY_BASELINE: f64 = 2.2;

/// Lower bound of the turbidity domain.
pub const TURBIDITY_MIN: f64 = 2.0;

/// Upper cap for humidity-boosted turbidity.
pub const TURBIDITY_MAX: f64 = 3.2;

/// Grazing-angle substitute used to keep the scattering integral free of
/// singular angles at the zenith and the horizon.
pub const GRAZING_EPSILON_RAD: f64 = 1e-6;

/// Suburban light-pollution intensity assumed when the influence is enabled
/// and no explicit level is configured.
pub const LIGHT_POLLUTION_DEFAULT: f64 = 0.5;
