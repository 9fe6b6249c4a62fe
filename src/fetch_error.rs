use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Listing request returned status {0}")]
    ListingStatus(StatusCode),
    #[error("Listing section '{0}' not found in page")]
    SectionNotFound(String),
    #[error("Data request returned status {0}")]
    DataStatus(StatusCode),
    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}
