//! The repository view state machine.

use log::{debug, warn};

use crate::repository::{FetchFailure, RepoSource, RepositoryRecord};

use super::derive::{DerivedView, LanguageFilter, derive_view};

/// State of a mounted view once the collection is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyView {
    collection: Vec<RepositoryRecord>,
    filter: LanguageFilter,
    derived: DerivedView,
}

impl ReadyView {
    pub fn new(collection: Vec<RepositoryRecord>) -> Self {
        let filter = LanguageFilter::All;
        let derived = derive_view(&collection, &filter);
        Self {
            collection,
            filter,
            derived,
        }
    }

    pub fn collection(&self) -> &[RepositoryRecord] {
        &self.collection
    }

    pub fn filter(&self) -> &LanguageFilter {
        &self.filter
    }

    /// Languages offered by the filter control.
    pub fn options(&self) -> &[String] {
        &self.derived.options
    }

    pub fn displayed(&self) -> &[RepositoryRecord] {
        &self.derived.displayed
    }

    /// Apply a new filter and re-derive the displayed list.
    pub fn select(&mut self, filter: LanguageFilter) {
        self.derived = derive_view(&self.collection, &filter);
        self.filter = filter;
    }
}

/// Observable states of a repository view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Failed(FetchFailure),
    Ready(ReadyView),
}

/// One mounted instance of the repository list.
///
/// The collection is fetched once per view. Filter changes only re-derive
/// the displayed list.
#[derive(Debug, Default)]
pub struct RepositoryView {
    state: ViewState,
    mounted: bool,
}

impl RepositoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Fetch the collection from `source`. Only the first call fetches.
    pub async fn mount<S: RepoSource + ?Sized>(&mut self, source: &S) -> &ViewState {
        if self.mounted {
            debug!("View already mounted, not fetching again");
            return &self.state;
        }
        self.mounted = true;

        debug!("Loading repositories from {}", source.location());
        self.state = match source.fetch_all().await {
            Ok(collection) => {
                debug!("Loaded {} repositories", collection.len());
                ViewState::Ready(ReadyView::new(collection))
            }
            Err(e) => {
                let failure = FetchFailure::from_error(&e);
                warn!("Failed to load repositories: {}", failure);
                ViewState::Failed(failure)
            }
        };
        &self.state
    }

    /// Change the selected language. Ignored unless the view is ready.
    pub fn select_language(&mut self, language: impl Into<LanguageFilter>) {
        match &mut self.state {
            ViewState::Ready(ready) => ready.select(language.into()),
            state => debug!("Ignoring filter change while {:?}", state),
        }
    }
}
