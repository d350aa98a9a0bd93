use anyhow::Result;
use log::debug;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    http::HttpClient,
    repository::{FileRepoSource, HttpRepoSource, RepoSource},
    runtime::Runtime,
};

/// Collection file read when no data URL is configured.
pub const DEFAULT_DATA_FILE: &str = "public/data/repos.json";

/// User agent sent with every request.
pub const USER_AGENT: &str = "folio-cli";

pub struct Config<R: Runtime> {
    pub runtime: Arc<R>,
    pub source: Box<dyn RepoSource>,
}

impl<R: Runtime + 'static> Config<R> {
    /// Selects the data source: the site at `data_url` when given, otherwise
    /// the local `data_file` (or [`DEFAULT_DATA_FILE`]).
    pub fn new(runtime: R, data_url: Option<String>, data_file: Option<PathBuf>) -> Result<Self> {
        let runtime = Arc::new(runtime);

        let source: Box<dyn RepoSource> = match data_url {
            Some(url) => {
                debug!("Using remote data source at {}", url);
                let client = Client::builder().user_agent(USER_AGENT).build()?;
                Box::new(HttpRepoSource::new(HttpClient::new(client), &url))
            }
            None => {
                let path = data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
                debug!("Using local data source at {:?}", path);
                Box::new(FileRepoSource::new(runtime.clone(), path))
            }
        };

        Ok(Self { runtime, source })
    }
}
