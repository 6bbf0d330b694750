//! Harmony schemes and their hue-offset tables.

use core::str::FromStr;

/// A color harmony scheme.
///
/// Each scheme owns a fixed, ordered list of hue offsets in degrees relative to
/// a base hue. Offsets are listed from most clockwise to least clockwise, so the
/// order also encodes where each derived color sits around a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorCombination {
    /// The base color alone.
    #[default]
    Single,

    /// The base color and its opposite.
    Complementary,

    /// The base color and its two neighbours 45° away.
    Analogous,

    /// Three colors evenly spaced around the wheel.
    Triadic,

    /// Four colors evenly spaced around the wheel.
    Tetradic,
}

impl ColorCombination {
    /// All schemes in declaration order.
    pub const ALL: [ColorCombination; 5] = [
        ColorCombination::Single,
        ColorCombination::Complementary,
        ColorCombination::Analogous,
        ColorCombination::Triadic,
        ColorCombination::Tetradic,
    ];

    /// Hue offsets in degrees, most clockwise first.
    pub const fn offsets(self) -> &'static [f32] {
        match self {
            ColorCombination::Single => &[],
            ColorCombination::Complementary => &[180.0],
            ColorCombination::Analogous => &[45.0, -45.0],
            ColorCombination::Triadic => &[120.0, -120.0],
            ColorCombination::Tetradic => &[90.0, 180.0, -90.0],
        }
    }

    /// Number of colors this scheme adds to the base color.
    #[inline]
    pub const fn offset_count(self) -> usize {
        self.offsets().len()
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            ColorCombination::Single => "Single",
            ColorCombination::Complementary => "Complementary",
            ColorCombination::Analogous => "Analogous",
            ColorCombination::Triadic => "Triadic",
            ColorCombination::Tetradic => "Tetradic",
        }
    }

    /// Icon identifier for the scheme (SF Symbols naming).
    pub const fn symbol_name(self) -> &'static str {
        match self {
            ColorCombination::Single => "die.face.1.fill",
            ColorCombination::Complementary => "die.face.2.fill",
            ColorCombination::Analogous => "die.face.2",
            ColorCombination::Triadic => "die.face.3.fill",
            ColorCombination::Tetradic => "die.face.4.fill",
        }
    }
}

impl core::fmt::Display for ColorCombination {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from parsing a [`ColorCombination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseCombinationError {
    /// Input was empty or whitespace.
    Empty,

    /// Input did not name a known scheme.
    UnknownCombination,
}

impl core::fmt::Display for ParseCombinationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseCombinationError::Empty => {
                write!(f, "color combination name is empty")
            }
            ParseCombinationError::UnknownCombination => {
                write!(
                    f,
                    "unknown color combination, expected one of: single, complementary, analogous, triadic, tetradic"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCombinationError {}

impl FromStr for ColorCombination {
    type Err = ParseCombinationError;

    /// Parses a scheme from its label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseCombinationError::Empty);
        }

        ColorCombination::ALL
            .into_iter()
            .find(|combination| name.eq_ignore_ascii_case(combination.label()))
            .ok_or(ParseCombinationError::UnknownCombination)
    }
}
