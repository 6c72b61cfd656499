use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Time-of-day block {slot} out of range, the day panel only has {available}")]
    TimeSlotOutOfRange { slot: usize, available: usize },

    #[error("Field cell {slot} out of range, the reading only has {available} cells")]
    CellOutOfRange { slot: usize, available: usize },

    #[error("Field cell {slot} has no <{element}> inside")]
    MissingElement { slot: usize, element: &'static str },

    #[error("Field cell {slot} has no '{attribute}' attribute on its <{element}>")]
    MissingAttribute {
        slot: usize,
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Field cell {slot} text '{text}' is not an integer")]
    InvalidNumber {
        slot: usize,
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
