//! Archive download over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ArchiveSource;

/// Blocking HTTP client that buffers the whole archive in memory.
#[derive(Debug, Clone)]
pub struct HttpArchiveSource {
    client: Client,
}

impl HttpArchiveSource {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl ArchiveSource for HttpArchiveSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        tracing::debug!(%url, "downloading archive");
        let download_error =
            |details: String| AppError::DownloadError { url: url.to_string(), details };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| download_error(e.to_string()))?
            .error_for_status()
            .map_err(|e| download_error(e.to_string()))?;

        let bytes = response.bytes().map_err(|e| download_error(e.to_string()))?;
        tracing::debug!(%url, size = bytes.len(), "archive downloaded");
        Ok(bytes.to_vec())
    }
}
