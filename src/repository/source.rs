//! Data sources for the repository collection.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::http::{HttpClient, HttpStatusError};
use crate::runtime::Runtime;

use super::{FetchFailure, RepositoryRecord};

/// Well-known path of the collection relative to the site root.
pub const DATA_PATH: &str = "/data/repos.json";

/// Retrieves the whole repository collection.
///
/// Implementations either return every record in published order or fail;
/// they never return partial data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn location(&self) -> String;

    /// Fetch the full collection.
    async fn fetch_all(&self) -> Result<Vec<RepositoryRecord>>;
}

#[async_trait]
impl RepoSource for Box<dyn RepoSource> {
    fn location(&self) -> String {
        (**self).location()
    }

    async fn fetch_all(&self) -> Result<Vec<RepositoryRecord>> {
        (**self).fetch_all().await
    }
}

/// Reads `/data/repos.json` from a site served over HTTP.
pub struct HttpRepoSource {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRepoSource {
    pub fn new(http_client: HttpClient, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, DATA_PATH)
    }
}

#[async_trait]
impl RepoSource for HttpRepoSource {
    fn location(&self) -> String {
        self.url()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<RepositoryRecord>> {
        let url = self.url();
        debug!("Fetching repositories from {}...", url);

        match self.http_client.get_json::<Vec<RepositoryRecord>>(&url).await {
            Ok(records) => {
                debug!("Fetched {} repositories", records.len());
                Ok(records)
            }
            Err(e) if e.downcast_ref::<HttpStatusError>().is_some() => {
                debug!("Repository fetch was unsuccessful: {}", e);
                Err(FetchFailure::unsuccessful().into())
            }
            Err(e) => Err(e),
        }
    }
}

/// Reads the collection from a local copy of `repos.json`.
pub struct FileRepoSource<R: Runtime> {
    runtime: Arc<R>,
    path: PathBuf,
}

impl<R: Runtime> FileRepoSource<R> {
    pub fn new(runtime: Arc<R>, path: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<R: Runtime> RepoSource for FileRepoSource<R> {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<RepositoryRecord>> {
        debug!("Reading repositories from {:?}...", self.path);

        if !self.runtime.exists(&self.path) {
            debug!("Repository file {:?} does not exist", self.path);
            return Err(FetchFailure::unsuccessful().into());
        }

        let content = self.runtime.read_to_string(&self.path)?;
        let records: Vec<RepositoryRecord> =
            serde_json::from_str(&content).context("Failed to parse repository data")?;

        debug!("Read {} repositories", records.len());
        Ok(records)
    }
}
