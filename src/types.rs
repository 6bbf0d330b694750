//! Core color types.

use crate::colors::{hsv_to_rgb, normalize_hue, rgb_to_hsv};

/// An additive color with normalized channels.
///
/// Channels are expected in the range 0.0-1.0. Values outside that range are
/// accepted and carried through conversions unchanged; clamp upstream if
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel.
    pub r: f32,

    /// Green channel.
    pub g: f32,

    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns the HSV equivalent of this color.
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Returns this color at a different brightness, keeping hue and saturation.
    pub fn with_value(self, value: f32) -> Rgb {
        let hsv = self.to_hsv();
        hsv_to_rgb(hsv.h, hsv.s, value)
    }
}

/// A hue/saturation/value color.
///
/// Hue is in degrees and may be any real number; it is wrapped into `[0, 360)`
/// by conversion and rotation. Saturation and value are expected in 0.0-1.0
/// but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f32,

    /// Saturation, 0.0 (grey) to 1.0 (fully saturated).
    pub s: f32,

    /// Value (brightness), 0.0 (black) to 1.0.
    pub v: f32,
}

impl Hsv {
    /// Creates a color from its components.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Returns the RGB equivalent of this color.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Rotates the hue by `offset` degrees.
    ///
    /// Positive offsets rotate clockwise on the wheel, which lowers the hue:
    /// the result has `h = normalize(h - offset)`. Saturation and value are
    /// kept.
    #[inline]
    pub fn rotate(self, offset: f32) -> Hsv {
        Hsv::new(normalize_hue(self.h - offset), self.s, self.v)
    }

    /// Returns this color with a different value.
    #[inline]
    pub fn with_value(self, value: f32) -> Hsv {
        Hsv::new(self.h, self.s, value)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsv()
    }
}

impl From<palette::Srgb> for Rgb {
    fn from(color: palette::Srgb) -> Self {
        Rgb::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for palette::Srgb {
    fn from(color: Rgb) -> Self {
        palette::Srgb::new(color.r, color.g, color.b)
    }
}

impl From<palette::Hsv> for Hsv {
    fn from(color: palette::Hsv) -> Self {
        Hsv::new(
            normalize_hue(color.hue.into_inner()),
            color.saturation,
            color.value,
        )
    }
}

impl From<Hsv> for palette::Hsv {
    fn from(color: Hsv) -> Self {
        palette::Hsv::new(color.h, color.s, color.v)
    }
}
