//! Where the catalog document comes from.
//!
//! The store only needs the raw bytes; a [`DocumentSource`] hides whether they
//! come from a file shipped with the site or from a URL.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;
use url::Url;

use super::error::SourceError;

/// Produces the raw bytes of the catalog document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the whole document.
    async fn fetch(&self) -> Result<Vec<u8>, SourceError>;

    /// Human-readable location, also used as the cache key.
    fn location(&self) -> &str;
}

/// Document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    #[instrument(skip(self), fields(path = %self.display))]
    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn location(&self) -> &str {
        &self.display
    }
}

/// Document served over HTTP(S). One GET per fetch; any non-2xx is an error.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    /// Create a source with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Catalog request returned non-success status");
            return Err(SourceError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn location(&self) -> &str {
        self.url.as_str()
    }
}

/// A configured source: a URL for `http://` and `https://` locations, a file
/// path for anything else.
#[derive(Debug, Clone)]
pub enum DataSource {
    File(FileSource),
    Http(HttpSource),
}

impl DataSource {
    /// Pick the source kind from a location string.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidLocation`] for a blank location or a malformed
    /// HTTP URL, [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn parse(location: &str, timeout: Duration) -> Result<Self, SourceError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(SourceError::InvalidLocation(String::new()));
        }

        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(location)
                .map_err(|_| SourceError::InvalidLocation(location.to_string()))?;
            return Ok(Self::Http(HttpSource::new(url, timeout)?));
        }

        Ok(Self::File(FileSource::new(location)))
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

#[async_trait]
impl DocumentSource for DataSource {
    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        match self {
            Self::File(source) => source.fetch().await,
            Self::Http(source) => source.fetch().await,
        }
    }

    fn location(&self) -> &str {
        match self {
            Self::File(source) => source.location(),
            Self::Http(source) => source.location(),
        }
    }
}
