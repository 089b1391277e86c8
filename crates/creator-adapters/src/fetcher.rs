//! Remote asset download.

use std::time::Duration;

use creator_core::{
    application::{ApplicationError, ports::AssetFetcher},
    error::CreatorResult,
};
use tracing::{info, instrument};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP fetcher. `file://` URLs are read from disk, which keeps
/// offline use and tests off the network.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::blocking::Client,
}

impl HttpAssetFetcher {
    pub fn new() -> CreatorResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> CreatorResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("addon-creator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::FetchFailed {
                url: String::new(),
                reason: format!("could not build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn fetch_http(&self, url: &str) -> CreatorResult<Vec<u8>> {
        let failed = |reason: String| ApplicationError::FetchFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| failed(e.to_string()))?
            .error_for_status()
            .map_err(|e| failed(e.to_string()))?;
        let bytes = response.bytes().map_err(|e| failed(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl AssetFetcher for HttpAssetFetcher {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> CreatorResult<Vec<u8>> {
        let bytes = match url.strip_prefix("file://") {
            Some(path) => std::fs::read(path).map_err(|e| ApplicationError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?,
            None => self.fetch_http(url)?,
        };
        info!(size = bytes.len(), "Asset downloaded");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_urls_are_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("flags.zip");
        std::fs::write(&archive, b"PK").unwrap();

        let fetcher = HttpAssetFetcher::new().unwrap();
        let bytes = fetcher.fetch(&format!("file://{}", archive.display())).unwrap();
        assert_eq!(bytes, b"PK");
    }

    #[test]
    fn missing_local_file_is_a_fetch_failure() {
        let fetcher = HttpAssetFetcher::new().unwrap();
        let err = fetcher.fetch("file:///definitely/not/here.zip").unwrap_err();
        assert!(err.to_string().contains("not/here.zip"));
    }
}
