//! The repository list view: derivation and state.

mod derive;
mod state;

pub use derive::{DerivedView, LanguageFilter, derive_view, language_options};
pub use state::{ReadyView, RepositoryView, ViewState};
