//! RGB ↔ HSV conversion.
//!
//! Free-function forms of the conversions used by [`Rgb::to_hsv`] and
//! [`Hsv::to_rgb`], for callers that hold raw components instead of the
//! crate's color types.
//!
//! Hue is expressed in degrees. Conversions always produce a hue in `[0, 360)`;
//! any real hue is accepted as input and wrapped. Saturation and value are not
//! clamped: out-of-range inputs propagate arithmetically.

use crate::types::{Hsv, Rgb};

/// Channel spread at or below which a color is treated as achromatic.
pub const ACHROMATIC_EPSILON: f32 = 1e-5;

/// Wraps a hue in degrees into `[0, 360)`.
#[inline]
pub fn normalize_hue(hue: f32) -> f32 {
    let angle = hue % 360.0;
    let angle = if angle < 0.0 { angle + 360.0 } else { angle };

    // Tiny negative remainders round up to exactly 360.0 in f32.
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Converts RGB components to HSV.
///
/// Achromatic colors (all channels within [`ACHROMATIC_EPSILON`] of each other)
/// have no hue; they are reported with `h = 0` and `s = 0`. The same sentinel is
/// used when the brightest channel is not positive, which only happens for
/// out-of-range negative inputs.
///
/// When two channels tie for the maximum, the hue sector is chosen in the fixed
/// order red, green, blue.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    if delta <= ACHROMATIC_EPSILON || max <= 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    Hsv::new(normalize_hue(sector * 60.0), delta / max, max)
}

/// Converts HSV components to RGB.
///
/// A saturation of exactly zero yields grey at the given value regardless of hue.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let sector = normalize_hue(h) / 60.0;
    let i = libm::floorf(sector);
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (i as u32) % 6 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Rgb {
    hsv_to_rgb(hue, 1.0, 1.0)
}
