//! Linear-light color math. Everything here operates in linear RGB; the
//! sRGB transfer function is applied only at the hex-string boundary.

use serde::{Deserialize, Serialize};

/// Rec.709 luminance weights.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// A linear-RGB color triple. Channels are unbounded radiance values until
/// tone mapping clamps them into [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn luminance(self) -> f64 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }

    pub fn clamp01(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    pub fn scale(self, s: f64) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }

    /// Linear interpolation toward `other`. Interpolating gamma-encoded
    /// values muddies gradients, so blending always happens here in
    /// linear light.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Luminance-preserving desaturation; factor 0 is identity, 1 is grey.
    pub fn desaturate(self, factor: f64) -> Self {
        let lum = self.luminance();
        self.lerp(Self::new(lum, lum, lum), factor)
    }

    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Encode to an uppercase `#RRGGBB` string. Channels are clamped to
    /// [0, 1] and pass through the piecewise sRGB transfer function.
    pub fn to_srgb_hex(self) -> String {
        let quantize = |x: f64| -> u8 { (srgb_encode(x.clamp(0.0, 1.0)) * 255.0).round() as u8 };
        format!(
            "#{:02X}{:02X}{:02X}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }

    /// Decode an `#RRGGBB` string back into linear RGB. Returns `None` on
    /// malformed input.
    pub fn from_srgb_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| -> Option<f64> {
            let value = u8::from_str_radix(digits.get(range)?, 16).ok()?;
            Some(srgb_decode(value as f64 / 255.0))
        };
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Piecewise sRGB transfer function (linear -> gamma-encoded).
pub fn srgb_encode(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Inverse of the piecewise sRGB transfer function.
pub fn srgb_decode(x: f64) -> f64 {
    if x <= 0.040_45 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}
