//! Harmony derivation.
//!
//! A harmony set is the base color followed by one color per offset of a
//! [`ColorCombination`], each produced by rotating the base hue. The same
//! derivation is available for [`Hsv`] and [`Rgb`] through the [`Harmony`]
//! trait; the RGB form converts to HSV once, derives, and converts each result
//! back, preserving order.

use crate::combination::ColorCombination;
use crate::types::{Hsv, Rgb};
use heapless::Vec;

/// Maximum number of colors in a harmony set (base plus three offsets).
pub const MAX_HARMONY_COLORS: usize = 4;

/// Ordered colors of a harmony set, base first.
pub type HarmonySet<C> = Vec<C, MAX_HARMONY_COLORS>;

/// Derives harmony colors from a base color.
pub trait Harmony: Copy {
    /// Rotates the hue by `offset` degrees (clockwise-positive).
    fn rotate_hue(self, offset: f32) -> Self;

    /// Returns the colors a combination adds to this one, in offset order.
    ///
    /// Empty for [`ColorCombination::Single`].
    fn additional_colors(self, combination: ColorCombination) -> HarmonySet<Self> {
        combination
            .offsets()
            .iter()
            .map(|&offset| self.rotate_hue(offset))
            .collect()
    }

    /// Returns this color followed by [`additional_colors`](Harmony::additional_colors).
    ///
    /// Always contains `1 + combination.offset_count()` colors.
    fn all_colors(self, combination: ColorCombination) -> HarmonySet<Self> {
        core::iter::once(self)
            .chain(self.additional_colors(combination))
            .collect()
    }
}

impl Harmony for Hsv {
    #[inline]
    fn rotate_hue(self, offset: f32) -> Self {
        self.rotate(offset)
    }
}

impl Harmony for Rgb {
    fn rotate_hue(self, offset: f32) -> Self {
        self.to_hsv().rotate(offset).to_rgb()
    }

    fn additional_colors(self, combination: ColorCombination) -> HarmonySet<Self> {
        self.to_hsv()
            .additional_colors(combination)
            .into_iter()
            .map(Hsv::to_rgb)
            .collect()
    }
}
