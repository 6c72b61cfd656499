mod archive;
mod arhivpogodi;
mod error;
mod extract;
mod report;
mod stats;
mod types;

pub use arhivpogodi::*;
pub use error::ArhivPogodiError;

pub use extract::day::{extract_day, DEFAULT_TIME_SLOT};
pub use extract::error::ExtractionError;
pub use extract::month::{extract_month, MonthExtraction};

pub use report::{MonthlyReport, ReportError};
pub use stats::{aggregate, AggregateError, MonthlyStatistics};

pub use types::observation::DayObservation;
pub use types::report_month::ReportMonth;
pub use types::weather_category::WeatherCategory;
pub use types::wind_direction::WindDirection;

pub use archive::error::FetchError;
pub use archive::page_loader::{PageLoader, DEFAULT_BASE_URL};
