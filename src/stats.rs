//! Monthly aggregation over the extracted day records.

use crate::types::observation::DayObservation;
use crate::types::weather_category::WeatherCategory;
use crate::types::wind_direction::WindDirection;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("No day records to aggregate")]
    NoRecords,
}

/// The figures the report prints for one month.
///
/// Maps are ordered by their key enums, so the rendered tables and the JSON
/// output keep a stable order: compass points clockwise from north with calm
/// last, precipitation categories before the no-precipitation bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStatistics {
    pub min_temperature: i32,
    pub max_temperature: i32,
    /// Mean of the daily temperatures, rounded to two decimals.
    pub average_temperature: f64,
    /// Sum of the maximum and minimum temperature, not the spread. The
    /// report's amplitude figure has always been defined this way.
    pub amplitude_temperature: i32,
    pub min_pressure: i32,
    pub max_pressure: i32,
    /// Mean of the daily pressures, rounded to two decimals.
    pub average_pressure: f64,
    /// Days per wind direction; directions that never occurred are absent.
    pub wind_directions_count: BTreeMap<WindDirection, u32>,
    /// Days per precipitation category; categories that never occurred are
    /// absent.
    pub weather_count: BTreeMap<WeatherCategory, u32>,
}

/// Aggregates a month of day records into [`MonthlyStatistics`].
///
/// Extremes and sums come from a single pass; every record contributes to
/// exactly one wind-direction bucket and one weather bucket. An empty slice
/// is the one failure case and maps to [`AggregateError::NoRecords`].
pub fn aggregate(records: &[DayObservation]) -> Result<MonthlyStatistics, AggregateError> {
    let first = records.first().ok_or(AggregateError::NoRecords)?;

    let mut min_temperature = first.temperature;
    let mut max_temperature = first.temperature;
    let mut min_pressure = first.pressure;
    let mut max_pressure = first.pressure;
    let mut temperature_sum: i64 = 0;
    let mut pressure_sum: i64 = 0;
    let mut wind_directions_count: BTreeMap<WindDirection, u32> = BTreeMap::new();
    let mut weather_count: BTreeMap<WeatherCategory, u32> = BTreeMap::new();

    for record in records {
        min_temperature = min_temperature.min(record.temperature);
        max_temperature = max_temperature.max(record.temperature);
        min_pressure = min_pressure.min(record.pressure);
        max_pressure = max_pressure.max(record.pressure);
        temperature_sum += i64::from(record.temperature);
        pressure_sum += i64::from(record.pressure);
        *wind_directions_count.entry(record.wind_direction).or_insert(0) += 1;
        *weather_count.entry(record.weather_category()).or_insert(0) += 1;
    }

    let days = records.len() as f64;
    Ok(MonthlyStatistics {
        min_temperature,
        max_temperature,
        average_temperature: round_to_hundredths(temperature_sum as f64 / days),
        amplitude_temperature: max_temperature + min_temperature,
        min_pressure,
        max_pressure,
        average_pressure: round_to_hundredths(pressure_sum as f64 / days),
        wind_directions_count,
        weather_count,
    })
}

/// Rounds to two decimals, halves away from zero.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(weather: &str, temperature: i32, wind: WindDirection, pressure: i32) -> DayObservation {
        DayObservation {
            weather: weather.to_string(),
            temperature,
            wind_direction: wind,
            pressure,
        }
    }

    #[test]
    fn no_records_is_an_error() {
        assert_eq!(aggregate(&[]), Err(AggregateError::NoRecords));
    }

    #[test]
    fn a_single_record_seeds_every_figure() {
        let stats = aggregate(&[record("Ясно", -4, WindDirection::North, 752)]).unwrap();

        assert_eq!(stats.min_temperature, -4);
        assert_eq!(stats.max_temperature, -4);
        assert_eq!(stats.average_temperature, -4.0);
        assert_eq!(stats.amplitude_temperature, -8);
        assert_eq!(stats.min_pressure, 752);
        assert_eq!(stats.max_pressure, 752);
        assert_eq!(stats.average_pressure, 752.0);
        assert_eq!(stats.wind_directions_count[&WindDirection::North], 1);
        assert_eq!(stats.weather_count[&WeatherCategory::NoPrecipitation], 1);
    }

    #[test]
    fn extremes_and_averages_over_a_month() {
        let records = [
            record("Ясно", -2, WindDirection::North, 749),
            record("Снег", -7, WindDirection::NorthEast, 761),
            record("Дождь", 3, WindDirection::North, 755),
            record("Пасмурно", 1, WindDirection::Calm, 751),
        ];
        let stats = aggregate(&records).unwrap();

        assert_eq!(stats.min_temperature, -7);
        assert_eq!(stats.max_temperature, 3);
        // (-2 - 7 + 3 + 1) / 4 = -1.25
        assert_eq!(stats.average_temperature, -1.25);
        assert_eq!(stats.min_pressure, 749);
        assert_eq!(stats.max_pressure, 761);
        assert_eq!(stats.average_pressure, 754.0);
    }

    #[test]
    fn amplitude_is_the_sum_of_the_extremes() {
        let records = [
            record("Ясно", -5, WindDirection::North, 750),
            record("Ясно", 10, WindDirection::North, 750),
            record("Ясно", 3, WindDirection::North, 750),
        ];
        let stats = aggregate(&records).unwrap();
        // max(10) + min(-5), not the difference.
        assert_eq!(stats.amplitude_temperature, 5);
    }

    #[test]
    fn averages_round_to_two_decimals() {
        // 1 + 2 + 2 = 5, 5 / 3 = 1.666... -> 1.67
        let records = [
            record("Ясно", 1, WindDirection::North, 751),
            record("Ясно", 2, WindDirection::North, 751),
            record("Ясно", 2, WindDirection::North, 752),
        ];
        let stats = aggregate(&records).unwrap();
        assert_eq!(stats.average_temperature, 1.67);
        // 751 + 751 + 752 = 2254, / 3 = 751.333... -> 751.33
        assert_eq!(stats.average_pressure, 751.33);

        // Values already at two decimals pass through unchanged.
        let halves = [
            record("Ясно", 1, WindDirection::North, 751),
            record("Ясно", 2, WindDirection::North, 752),
        ];
        let stats = aggregate(&halves).unwrap();
        assert_eq!(stats.average_temperature, 1.5);
        assert_eq!(stats.average_pressure, 751.5);
    }

    #[test]
    fn rounding_halves_move_away_from_zero() {
        // 0.125 is exactly representable, so the half is a true half.
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(-0.125), -0.13);
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket_per_map() {
        let records = [
            record("Снег", -1, WindDirection::North, 750),
            record("Снег с дождем", -2, WindDirection::North, 750),
            record("Дождь", 2, WindDirection::Calm, 750),
            record("Ясно", 4, WindDirection::SouthEast, 750),
        ];
        let stats = aggregate(&records).unwrap();

        let wind_total: u32 = stats.wind_directions_count.values().sum();
        let weather_total: u32 = stats.weather_count.values().sum();
        assert_eq!(wind_total, records.len() as u32);
        assert_eq!(weather_total, records.len() as u32);

        assert_eq!(stats.wind_directions_count[&WindDirection::North], 2);
        assert_eq!(stats.wind_directions_count[&WindDirection::Calm], 1);
        assert_eq!(stats.wind_directions_count[&WindDirection::SouthEast], 1);
        assert_eq!(stats.wind_directions_count.len(), 3);
        assert_eq!(stats.weather_count[&WeatherCategory::Snow], 2);
        assert_eq!(stats.weather_count[&WeatherCategory::Rain], 1);
        assert_eq!(stats.weather_count[&WeatherCategory::NoPrecipitation], 1);
        assert_eq!(stats.weather_count.get(&WeatherCategory::Hail), None);
    }

    #[test]
    fn maps_iterate_in_declaration_order() {
        let records = [
            record("Ясно", 1, WindDirection::Calm, 750),
            record("Ясно", 1, WindDirection::West, 750),
            record("Ясно", 1, WindDirection::North, 750),
        ];
        let stats = aggregate(&records).unwrap();
        let order: Vec<WindDirection> = stats.wind_directions_count.keys().copied().collect();
        assert_eq!(
            order,
            [WindDirection::North, WindDirection::West, WindDirection::Calm]
        );
    }

    #[test]
    fn serializes_map_keys_as_labels() {
        let records = [
            record("Снег", -1, WindDirection::NorthWest, 750),
            record("Ясно", 2, WindDirection::Calm, 755),
        ];
        let stats = aggregate(&records).unwrap();
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["wind_directions_count"]["СЗ"], 1);
        assert_eq!(json["wind_directions_count"]["ШTЛ"], 1);
        assert_eq!(json["weather_count"]["Снег"], 1);
        assert_eq!(json["weather_count"]["Без Осадков"], 1);
        assert_eq!(json["amplitude_temperature"], 1);
    }
}
