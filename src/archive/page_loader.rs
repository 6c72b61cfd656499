//! Downloads month pages from the archive.

use crate::archive::error::FetchError;
use crate::types::report_month::ReportMonth;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

/// The Saint Petersburg archive. Month pages live under `{base}/{year}/{month}`.
pub const DEFAULT_BASE_URL: &str = "https://arhivpogodi.ru/arhiv/sankt-peterburg";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches month pages over HTTP.
///
/// Every fetch downloads the page again; the archive's past months do change
/// (late corrections, the current month filling in), so nothing is cached
/// between runs.
pub struct PageLoader {
    base_url: String,
    client: Client,
}

impl PageLoader {
    pub fn new(base_url: &str) -> Result<PageLoader, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(PageLoader {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The page URL for a month. The month segment is zero-padded, which is
    /// the form the archive links itself.
    pub fn month_url(&self, month: ReportMonth) -> String {
        format!("{}/{}/{:02}", self.base_url, month.year(), month.month())
    }

    /// Downloads the month page and returns its HTML.
    pub async fn fetch_month_page(&self, month: ReportMonth) -> Result<String, FetchError> {
        let url = self.month_url(month);
        info!("Downloading archive page {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(url.clone(), e))?;
        debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_url_is_zero_padded() {
        let loader = PageLoader::new(DEFAULT_BASE_URL).unwrap();
        let month = ReportMonth::new(3, 2024).unwrap();
        assert_eq!(
            loader.month_url(month),
            "https://arhivpogodi.ru/arhiv/sankt-peterburg/2024/03"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let loader = PageLoader::new("http://127.0.0.1:9/arhiv/").unwrap();
        let month = ReportMonth::new(12, 2023).unwrap();
        assert_eq!(loader.month_url(month), "http://127.0.0.1:9/arhiv/2023/12");
    }
}
