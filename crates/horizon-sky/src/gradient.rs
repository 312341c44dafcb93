use horizon_core::constants::EXPOSURE;
use horizon_core::{AtmosphericParameters, GradientStop, LinearRgb, ScatteringSample};

/// Amber of sodium/LED streetlight scatter.
const POLLUTION_COLOR: LinearRgb = LinearRgb {
    r: 1.0,
    g: 0.65,
    b: 0.35,
};

/// Zenith luminance below which the sky counts as fully dark for the
/// light-pollution dome. The gate fades in linearly so a dusk sweep stays
/// continuous.
const DEEP_NIGHT_LUMINANCE: f64 = 0.01;

/// Turn scattering samples into displayable gradient stops.
///
/// Every blend here operates on linear RGB; the sRGB transfer function is
/// applied once, at the hex boundary. Stops come out in sample order with
/// `fraction` 0 at the zenith and 1 at the horizon.
pub fn to_gradient(
    samples: &[ScatteringSample],
    atmosphere: &AtmosphericParameters,
) -> Vec<GradientStop> {
    let mut colors: Vec<LinearRgb> = samples
        .iter()
        .map(|s| s.radiance.scale(EXPOSURE))
        .collect();

    apply_overcast(&mut colors, atmosphere.overcast);
    apply_light_pollution(&mut colors, atmosphere.light_pollution, samples);

    samples
        .iter()
        .zip(colors)
        .map(|(sample, color)| {
            let color = tone_map(color);
            GradientStop {
                fraction: (sample.zenith_angle_deg / 90.0).clamp(0.0, 1.0),
                hex: color.to_srgb_hex(),
                color,
            }
        })
        .collect()
}

/// Overcast flattens the sky: desaturate each stop, then pull everything
/// toward the gradient midpoint to kill contrast.
fn apply_overcast(colors: &mut [LinearRgb], overcast: f64) {
    if overcast <= 0.0 || colors.is_empty() {
        return;
    }
    for color in colors.iter_mut() {
        *color = color.desaturate(overcast);
    }
    let mid = colors[0].lerp(colors[colors.len() - 1], 0.5);
    let blend = overcast * 0.4;
    for color in colors.iter_mut() {
        *color = color.lerp(mid, blend);
    }
}

/// Urban glow, pooled at the horizon. The zenith luminance gates a dome
/// effect: in deep night the zenith stays untouched while the horizon blend
/// strengthens; in daylight the glow is a faint uniform warm cast.
fn apply_light_pollution(colors: &mut [LinearRgb], level: f64, samples: &[ScatteringSample]) {
    if level <= 0.0 || colors.is_empty() {
        return;
    }
    let night = (1.0 - colors[0].luminance() / DEEP_NIGHT_LUMINANCE).clamp(0.0, 1.0);
    let zenith_blend = level * 0.03 * (1.0 - night);
    let horizon_blend = level * (0.12 + 0.06 * night);
    for (color, sample) in colors.iter_mut().zip(samples) {
        let f = (sample.zenith_angle_deg / 90.0).clamp(0.0, 1.0);
        let blend = zenith_blend + (horizon_blend - zenith_blend) * f * f;
        *color = color.lerp(POLLUTION_COLOR, blend);
    }
}

/// Clamp-and-normalize: divide by the max channel when over range so hue
/// survives, then clamp. No HDR curve.
fn tone_map(color: LinearRgb) -> LinearRgb {
    let max = color.max_channel();
    let scaled = if max > 1.0 {
        color.scale(1.0 / max)
    } else {
        color
    };
    scaled.clamp01()
}
