//! Defines the `WeatherCategory` enum, bucketing the archive's free-text
//! weather descriptions into the precipitation categories the report counts.

use serde::{Serialize, Serializer};
use std::fmt;

/// A precipitation category derived from a weather description.
///
/// The archive describes conditions with free text ("Пасмурно, небольшой
/// снег", "Облачно, без осадков", ...). The report does not count those
/// phrases verbatim; it buckets each one into a category with
/// [`WeatherCategory::classify`].
///
/// # Examples
///
/// ```rust
/// use arhivpogodi::WeatherCategory;
///
/// assert_eq!(
///     WeatherCategory::classify("Пасмурно, небольшой снег"),
///     WeatherCategory::Snow
/// );
/// assert_eq!(
///     WeatherCategory::classify("Малооблачно"),
///     WeatherCategory::NoPrecipitation
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeatherCategory {
    /// The description mentions snow (`снег`).
    Snow,
    /// The description mentions rain (`дождь`) or drizzle (`морось`).
    Rain,
    /// The description mentions hail (`град`).
    Hail,
    /// None of the precipitation markers matched.
    NoPrecipitation,
}

impl WeatherCategory {
    /// Buckets a weather description into its category.
    ///
    /// Matching is case-insensitive substring search over the markers, in
    /// order: snow, then rain or drizzle, then hail. The first marker found
    /// decides the category, so a mixed description like "снег с дождем"
    /// counts as snow. Descriptions with no marker fall into
    /// [`WeatherCategory::NoPrecipitation`].
    pub fn classify(description: &str) -> Self {
        let description = description.to_lowercase();
        if description.contains("снег") {
            WeatherCategory::Snow
        } else if description.contains("дождь") || description.contains("морось") {
            WeatherCategory::Rain
        } else if description.contains("град") {
            WeatherCategory::Hail
        } else {
            WeatherCategory::NoPrecipitation
        }
    }

    /// The label the report prints for this category.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::Snow => "Снег",
            WeatherCategory::Rain => "Дождь",
            WeatherCategory::Hail => "Град",
            WeatherCategory::NoPrecipitation => "Без Осадков",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for WeatherCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
