use crate::types::weather_category::WeatherCategory;
use crate::types::wind_direction::WindDirection;

/// One day's reading, taken from a single time-of-day block of the archive's
/// day panel.
#[derive(Debug, PartialEq, Clone)]
pub struct DayObservation {
    pub weather: String,                // free text, e.g. "Пасмурно, небольшой снег"
    pub temperature: i32,               // °C
    pub wind_direction: WindDirection,  // compass label, calm when unrecognized
    pub pressure: i32,                  // mm Hg
}

impl DayObservation {
    /// The precipitation bucket this day's weather text falls into.
    pub fn weather_category(&self) -> WeatherCategory {
        WeatherCategory::classify(&self.weather)
    }
}
