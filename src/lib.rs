#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`**: Additive color with normalized 0.0-1.0 channels
//! - **`Hsv`**: Hue in degrees, saturation and value in 0.0-1.0
//! - **`ColorCombination`**: Harmony scheme (`Single`, `Complementary`, `Analogous`, `Triadic`, `Tetradic`) with its hue-offset table
//! - **`Harmony`**: Trait deriving the ordered harmony set of a base color, implemented for both `Rgb` and `Hsv`
//! - **`HarmonySet`**: Fixed-capacity, allocation-free list of derived colors, base first
//! - **`WheelPoint`**: Polar position on a hue/saturation wheel, translated into a color for a given brightness
//! - **`Indicator`**: Where to draw each color of a harmony set on the wheel
//!
//! All operations are pure functions over `Copy` types and never fail. Achromatic
//! colors report a hue of 0, and saturation and value are never clamped.

pub mod colors;
pub mod types;
pub mod combination;
pub mod harmony;
pub mod wheel;

pub use colors::{hsv_to_rgb, normalize_hue, rgb_to_hsv, ACHROMATIC_EPSILON};
pub use types::{Hsv, Rgb};
pub use combination::{ColorCombination, ParseCombinationError};
pub use harmony::{Harmony, HarmonySet, MAX_HARMONY_COLORS};
pub use wheel::{atan2_to_degrees, indicators, Indicator, Point, WheelPoint};

pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);
pub const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);
