//! Walks the day panels of a month page and collects their readings.

use crate::extract::day::extract_day;
use crate::types::observation::DayObservation;
use log::{debug, info};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static DAY_PANEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.swiper-slide.swiper-autoheight.w-auto.d-inline-block.border-start")
        .expect("day panel selector")
});

/// The day records collected from one month page.
///
/// `truncated` is set when a day panel could not be read and extraction
/// stopped there; `records` then holds the days up to that panel. An archive
/// page usually degrades from the end (the trailing panels of a partial month
/// are stubs), so a truncated prefix is still a usable report.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthExtraction {
    pub records: Vec<DayObservation>,
    pub truncated: bool,
}

/// Extracts every readable day from a month page, in page order.
///
/// Day panels are matched by the archive's panel classes. The first panel
/// that fails to yield a reading stops the walk: its error is logged at debug
/// level and reported through [`MonthExtraction::truncated`] rather than
/// returned. A page with no panels at all (the archive's not-found page, for
/// one) comes back as an empty, untruncated extraction.
pub fn extract_month(html: &str, time_slot: usize) -> MonthExtraction {
    let document = Html::parse_document(html);
    let mut records = Vec::new();
    let mut truncated = false;

    for (index, panel) in document.select(&DAY_PANEL).enumerate() {
        match extract_day(panel, time_slot) {
            Ok(observation) => records.push(observation),
            Err(err) => {
                debug!("day panel {index} is unreadable, stopping: {err}");
                truncated = true;
                break;
            }
        }
    }

    info!(
        "extracted {} day record(s), truncated: {}",
        records.len(),
        truncated
    );
    MonthExtraction { records, truncated }
}
