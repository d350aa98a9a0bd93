//! Repository records and the data sources that provide them.

mod source;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use source::{DATA_PATH, FileRepoSource, HttpRepoSource, RepoSource};

#[cfg(test)]
pub use source::MockRepoSource;

/// Placeholder shown for records without a description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Label shown for records without a language.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// One entry of the published repository collection.
///
/// Field names on the wire follow the export that produces `repos.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub star_count: u64,
    #[serde(rename = "forks_count")]
    pub fork_count: u64,
}

impl RepositoryRecord {
    /// The language, or `None` when it is absent or empty.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }

    pub fn language_label(&self) -> &str {
        self.language().unwrap_or(UNKNOWN_LANGUAGE)
    }

    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|desc| !desc.is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }
}

/// The single failure kind of a repository fetch.
///
/// Transport errors, non-success responses and malformed payloads all
/// collapse into this one message-carrying error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    /// Message used when the underlying failure has no text.
    pub const FALLBACK_MESSAGE: &'static str = "An error occurred";

    /// Message used when the data source answers without success.
    pub const UNSUCCESSFUL_MESSAGE: &'static str = "Failed to fetch repositories";

    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self {
                message: Self::FALLBACK_MESSAGE.to_string(),
            }
        } else {
            Self { message }
        }
    }

    /// A retrieval that completed without a success indication.
    pub fn unsuccessful() -> Self {
        Self::new(Self::UNSUCCESSFUL_MESSAGE)
    }

    /// Converts any retrieval error into a `FetchFailure`, keeping the full
    /// context chain as the message.
    pub fn from_error(err: &anyhow::Error) -> Self {
        if let Some(failure) = err.downcast_ref::<FetchFailure>() {
            return failure.clone();
        }
        Self::new(format!("{:#}", err))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchFailure {}
