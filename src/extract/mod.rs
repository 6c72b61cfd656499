pub mod day;
pub mod error;
pub mod month;
