//! Defines the `WindDirection` enum for the compass labels printed by the
//! archive, plus the calm marker it uses when there is no wind.

use serde::{Serialize, Serializer};
use std::fmt;

/// A wind direction as the archive prints it: one of the eight compass
/// points, or [`WindDirection::Calm`] for a calm reading.
///
/// The archive labels directions with Cyrillic compass abbreviations
/// (`С`, `СВ`, `В`, ...). Any cell text outside that set is treated as calm,
/// so [`WindDirection::from_text`] never fails.
///
/// # Examples
///
/// ```rust
/// use arhivpogodi::WindDirection;
///
/// assert_eq!(WindDirection::from_text("СВ"), WindDirection::NorthEast);
/// assert_eq!(WindDirection::from_text("штиль"), WindDirection::Calm);
/// assert_eq!(WindDirection::North.to_string(), "С");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindDirection {
    /// `С`: north.
    North,
    /// `СВ`: north-east.
    NorthEast,
    /// `В`: east.
    East,
    /// `ЮВ`: south-east.
    SouthEast,
    /// `Ю`: south.
    South,
    /// `ЮЗ`: south-west.
    SouthWest,
    /// `З`: west.
    West,
    /// `СЗ`: north-west.
    NorthWest,
    /// No wind. The archive prints this with a Latin capital T in the middle
    /// of an otherwise Cyrillic word; the label keeps those exact bytes.
    Calm,
}

impl WindDirection {
    /// Maps a direction cell's text to a `WindDirection`.
    ///
    /// The text must match one of the eight compass labels exactly (after
    /// surrounding whitespace is removed by the caller). Everything else,
    /// including the archive's own calm marker, maps to `Calm`.
    pub fn from_text(text: &str) -> Self {
        match text {
            "С" => WindDirection::North,
            "СВ" => WindDirection::NorthEast,
            "В" => WindDirection::East,
            "ЮВ" => WindDirection::SouthEast,
            "Ю" => WindDirection::South,
            "ЮЗ" => WindDirection::SouthWest,
            "З" => WindDirection::West,
            "СЗ" => WindDirection::NorthWest,
            _ => WindDirection::Calm,
        }
    }

    /// The label the archive uses for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            WindDirection::North => "С",
            WindDirection::NorthEast => "СВ",
            WindDirection::East => "В",
            WindDirection::SouthEast => "ЮВ",
            WindDirection::South => "Ю",
            WindDirection::SouthWest => "ЮЗ",
            WindDirection::West => "З",
            WindDirection::NorthWest => "СЗ",
            WindDirection::Calm => "Ш\u{54}Л",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for WindDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
