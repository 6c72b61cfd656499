//! The main entry point for building weather reports from the archive.
//! It downloads a month page, extracts the day readings, and aggregates
//! them into the figures the report prints.

use crate::archive::page_loader::{PageLoader, DEFAULT_BASE_URL};
use crate::error::ArhivPogodiError;
use crate::extract::day::DEFAULT_TIME_SLOT;
use crate::extract::month::{extract_month, MonthExtraction};
use crate::report::MonthlyReport;
use crate::stats::aggregate;
use crate::types::report_month::ReportMonth;
use bon::bon;

/// The client for the arhivpogodi.ru weather archive.
///
/// Create one with [`ArhivPogodi::new()`] to read the real archive, or
/// [`ArhivPogodi::with_base_url()`] to point it somewhere else (a local
/// server in tests, a mirror).
///
/// # Examples
///
/// ```rust
/// # use arhivpogodi::{ArhivPogodi, ArhivPogodiError};
/// # fn run() -> Result<(), ArhivPogodiError> {
/// let client = ArhivPogodi::new()?;
/// // ... fetch months, build reports ...
/// # Ok(())
/// # }
/// ```
pub struct ArhivPogodi {
    loader: PageLoader,
}

#[bon]
impl ArhivPogodi {
    /// Creates a client for the real archive at
    /// `https://arhivpogodi.ru/arhiv/sankt-peterburg`.
    ///
    /// # Errors
    ///
    /// Returns [`ArhivPogodiError::Fetch`] if the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, ArhivPogodiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a different archive root. Month pages are
    /// fetched from `{base_url}/{year}/{month}`.
    ///
    /// # Errors
    ///
    /// Returns [`ArhivPogodiError::Fetch`] if the HTTP client cannot be
    /// constructed.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self, ArhivPogodiError> {
        Ok(Self {
            loader: PageLoader::new(base_url.as_ref())?,
        })
    }

    /// Downloads a month page and extracts its day readings.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.month(ReportMonth)`: **Required.** The month to fetch.
    /// * `.time_slot(usize)`: Optional. Which time-of-day block of each day
    ///   panel to read. Defaults to the evening reading.
    ///
    /// # Returns
    ///
    /// A [`MonthExtraction`]: the readable day records in page order, plus a
    /// flag telling whether extraction stopped early at an unreadable panel.
    ///
    /// # Errors
    ///
    /// Returns [`ArhivPogodiError::Fetch`] when the download fails, including
    /// non-success HTTP statuses. An empty or unparseable page is not an
    /// error at this level; it shows up as an empty extraction.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use arhivpogodi::{ArhivPogodi, ArhivPogodiError, ReportMonth};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ArhivPogodiError> {
    /// let client = ArhivPogodi::new()?;
    /// let month = ReportMonth::new(1, 2024).unwrap();
    ///
    /// let extraction = client.fetch_month().month(month).call().await?;
    /// println!("{} readable days", extraction.records.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn fetch_month(
        &self,
        month: ReportMonth,
        time_slot: Option<usize>,
    ) -> Result<MonthExtraction, ArhivPogodiError> {
        let time_slot = time_slot.unwrap_or(DEFAULT_TIME_SLOT);
        let html = self.loader.fetch_month_page(month).await?;
        Ok(extract_month(&html, time_slot))
    }

    /// Builds the full report for a month: fetch, extract, aggregate.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.month(ReportMonth)`: **Required.** The month to report on.
    /// * `.time_slot(usize)`: Optional. Which time-of-day block of each day
    ///   panel to read. Defaults to the evening reading.
    ///
    /// # Returns
    ///
    /// A [`MonthlyReport`] ready to render with
    /// [`MonthlyReport::to_markdown`].
    ///
    /// # Errors
    ///
    /// Returns [`ArhivPogodiError::Fetch`] when the download fails and
    /// [`ArhivPogodiError::Aggregate`] when the page yields no readable day
    /// records, which is what the archive's "month not found" page looks like
    /// to the extractor.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use arhivpogodi::{ArhivPogodi, ArhivPogodiError, ReportMonth};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ArhivPogodiError> {
    /// let client = ArhivPogodi::new()?;
    /// let month = ReportMonth::new(1, 2024).unwrap();
    ///
    /// let report = client.monthly_report().month(month).call().await?;
    /// print!("{}", report.to_markdown());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn monthly_report(
        &self,
        month: ReportMonth,
        time_slot: Option<usize>,
    ) -> Result<MonthlyReport, ArhivPogodiError> {
        let extraction = self
            .fetch_month()
            .month(month)
            .maybe_time_slot(time_slot)
            .call()
            .await?;
        let statistics = aggregate(&extraction.records)?;
        Ok(MonthlyReport { month, statistics })
    }
}
