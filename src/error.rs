use crate::archive::error::FetchError;
use crate::report::ReportError;
use crate::stats::AggregateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArhivPogodiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed to serialize the statistics")]
    Json(#[from] serde_json::Error),
}
