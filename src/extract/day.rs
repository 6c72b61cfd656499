//! Pulls one [`DayObservation`] out of a day panel of the archive page.
//!
//! The archive renders each day as a panel of time-of-day blocks, and each
//! block as a flat run of `<div>` cells with no distinguishing markup. The
//! fields sit at fixed positions in that run, so extraction is driven by the
//! offset table below rather than by CSS classes.

use crate::extract::error::ExtractionError;
use crate::types::observation::DayObservation;
use crate::types::wind_direction::WindDirection;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

/// The time-of-day block the report reads, counted from the start of the day
/// panel. Block 6 is the evening reading.
pub const DEFAULT_TIME_SLOT: usize = 6;

// Offset table: positions of the fields within one time-of-day block.
const WEATHER_SLOT: usize = 1; // <img> whose alt text describes the weather
const TEMPERATURE_SLOT: usize = 2; // <span> with the integer °C
const PRESSURE_SLOT: usize = 5; // integer mm Hg
const WIND_SLOT: usize = 11; // compass label, anything else means calm

static TIME_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.d-inline-block").expect("time block selector"));
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("img selector"));
static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").expect("span selector"));

/// Extracts the reading at `time_slot` from one day panel.
///
/// Fails with an [`ExtractionError`] describing the first field that does not
/// sit where the offset table says it should, which is how a layout change on
/// the archive side shows up.
pub fn extract_day(
    day_panel: ElementRef<'_>,
    time_slot: usize,
) -> Result<DayObservation, ExtractionError> {
    let blocks: Vec<ElementRef> = day_panel.select(&TIME_BLOCK).collect();
    let reading = blocks
        .get(time_slot)
        .copied()
        .ok_or(ExtractionError::TimeSlotOutOfRange {
            slot: time_slot,
            available: blocks.len(),
        })?;

    let cells: Vec<ElementRef> = reading
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "div")
        .collect();

    let weather = cell(&cells, WEATHER_SLOT)?
        .select(&IMG)
        .next()
        .ok_or(ExtractionError::MissingElement {
            slot: WEATHER_SLOT,
            element: "img",
        })?
        .value()
        .attr("alt")
        .ok_or(ExtractionError::MissingAttribute {
            slot: WEATHER_SLOT,
            element: "img",
            attribute: "alt",
        })?
        .trim()
        .to_string();

    let temperature_span =
        cell(&cells, TEMPERATURE_SLOT)?
            .select(&SPAN)
            .next()
            .ok_or(ExtractionError::MissingElement {
                slot: TEMPERATURE_SLOT,
                element: "span",
            })?;
    let temperature = parse_int(&text_of(temperature_span), TEMPERATURE_SLOT)?;

    let pressure = parse_int(&text_of(cell(&cells, PRESSURE_SLOT)?), PRESSURE_SLOT)?;

    let wind_direction = WindDirection::from_text(&text_of(cell(&cells, WIND_SLOT)?));

    Ok(DayObservation {
        weather,
        temperature,
        wind_direction,
        pressure,
    })
}

fn cell<'a>(cells: &[ElementRef<'a>], slot: usize) -> Result<ElementRef<'a>, ExtractionError> {
    cells
        .get(slot)
        .copied()
        .ok_or(ExtractionError::CellOutOfRange {
            slot,
            available: cells.len(),
        })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_int(text: &str, slot: usize) -> Result<i32, ExtractionError> {
    text.parse().map_err(|source| ExtractionError::InvalidNumber {
        slot,
        text: text.to_string(),
        source,
    })
}
