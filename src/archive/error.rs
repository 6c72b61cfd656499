use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to construct the HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read the page body from {0}")]
    BodyRead(String, #[source] reqwest::Error),
}
