//! Color wheel geometry.
//!
//! Maps between positions on a circular hue/saturation wheel and colors. Hue is
//! the angle around the wheel (counter-clockwise from the positive x axis, with
//! y pointing up) and saturation is the distance from the center, normalized so
//! the rim is 1.0. Brightness is supplied separately by the caller.
//!
//! Gesture handling and drawing stay in the UI; this module only provides the
//! numbers the UI needs to select a color and to place indicators.

use crate::combination::ColorCombination;
use crate::harmony::HarmonySet;
use crate::types::{Hsv, Rgb};
use core::f32::consts::PI;

/// A point in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,

    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        libm::hypotf(self.x - other.x, self.y - other.y)
    }
}

/// Converts an `atan2` result in radians to degrees in `[0, 360)`.
pub fn atan2_to_degrees(radians: f32) -> f32 {
    let radians = if radians < 0.0 { 2.0 * PI + radians } else { radians };
    let degrees = radians * 180.0 / PI;

    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// A polar position on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WheelPoint {
    /// Angle in degrees, counter-clockwise from the positive x axis.
    pub angle: f32,

    /// Distance from the center, 1.0 at the rim.
    pub distance: f32,
}

impl WheelPoint {
    /// Creates a wheel point.
    #[inline]
    pub const fn new(angle: f32, distance: f32) -> Self {
        Self { angle, distance }
    }

    /// Translates a pointer location into wheel coordinates.
    ///
    /// `center` is the wheel center and `radius` the distance from the center to
    /// the rim, both in the same screen space as `location`. A non-positive
    /// radius yields an infinite or undefined distance, which [`to_hsv`]
    /// clamps to the rim.
    ///
    /// [`to_hsv`]: WheelPoint::to_hsv
    pub fn from_cartesian(center: Point, location: Point, radius: f32) -> Self {
        let dy = center.y - location.y;
        let dx = location.x - center.x;

        Self {
            angle: atan2_to_degrees(libm::atan2f(dy, dx)),
            distance: center.distance(location) / radius,
        }
    }

    /// The color selected at this position for the given brightness.
    ///
    /// Distance beyond the rim is clamped to full saturation.
    pub fn to_hsv(self, brightness: f32) -> Hsv {
        Hsv::new(self.angle, self.distance.min(1.0), brightness)
    }

    /// RGB form of [`to_hsv`](WheelPoint::to_hsv).
    #[inline]
    pub fn to_rgb(self, brightness: f32) -> Rgb {
        self.to_hsv(brightness).to_rgb()
    }
}

/// Where to draw a color indicator on the wheel.
///
/// `rotation` is the rotation to apply in the UI's clockwise-positive
/// convention, so a hue `h` sits at rotation `-h`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator {
    /// Rotation in degrees, clockwise-positive.
    pub rotation: f32,

    /// Distance from the center, 1.0 at the rim.
    pub distance: f32,
}

impl Indicator {
    /// Indicator for a single color.
    #[inline]
    pub fn for_color(color: Hsv) -> Self {
        Self {
            rotation: -color.h,
            distance: color.s,
        }
    }
}

/// Indicators for a base color and each color a combination adds to it.
///
/// The base indicator comes first, followed by one per offset in table order at
/// `rotation = -base.h + offset`. All share the base saturation.
pub fn indicators(base: Hsv, combination: ColorCombination) -> HarmonySet<Indicator> {
    let main = Indicator::for_color(base);

    core::iter::once(main)
        .chain(combination.offsets().iter().map(|&offset| Indicator {
            rotation: main.rotation + offset,
            distance: main.distance,
        }))
        .collect()
}
