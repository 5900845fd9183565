use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error fetching raw log text from a source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A place the flight log can be fetched from
///
/// The dashboard fetches a statically-served CSV over HTTP; the file
/// implementation covers offline replay and tests. Whole-file
/// fetch-then-parse, no streaming.
#[async_trait]
pub trait TrajectorySource: Send + Sync {
    /// Human-readable identifier for log lines
    fn describe(&self) -> String;

    /// Fetch the raw CSV text
    async fn fetch_raw(&self) -> Result<String, SourceError>;
}

/// Flight log served over HTTP (e.g. `https://track.example.org/data.csv`)
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TrajectorySource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_raw(&self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Flight log on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

#[async_trait]
impl TrajectorySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_raw(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Pick a source implementation from a user-supplied locator: URLs go over
/// HTTP, anything else is treated as a path.
pub fn source_for(locator: &str) -> Box<dyn TrajectorySource> {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        Box::new(HttpSource::new(locator))
    } else {
        Box::new(FileSource::new(locator))
    }
}
