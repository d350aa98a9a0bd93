//! Pure derivation of the filter options and the displayed list.

use crate::repository::RepositoryRecord;

/// The language selected in the filter control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    /// "All Languages"
    #[default]
    All,
    /// Exact, case-sensitive match on the record's language.
    Only(String),
}

impl LanguageFilter {
    /// The value carried by the filter control; empty for `All`.
    pub fn as_value(&self) -> &str {
        match self {
            LanguageFilter::All => "",
            LanguageFilter::Only(lang) => lang,
        }
    }

    pub fn matches(&self, record: &RepositoryRecord) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(lang) => record.language.as_deref() == Some(lang.as_str()),
        }
    }
}

impl From<&str> for LanguageFilter {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            LanguageFilter::All
        } else {
            LanguageFilter::Only(value.to_string())
        }
    }
}

impl From<Option<String>> for LanguageFilter {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(lang) if !lang.is_empty() => LanguageFilter::Only(lang),
            _ => LanguageFilter::All,
        }
    }
}

/// Result of [`derive_view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView {
    /// Distinct non-empty languages in first-seen order.
    pub options: Vec<String>,
    /// Records matching the filter, most starred first.
    pub displayed: Vec<RepositoryRecord>,
}

/// Distinct non-empty languages of `collection`, in first-seen order.
pub fn language_options(collection: &[RepositoryRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for lang in collection.iter().filter_map(RepositoryRecord::language) {
        if !options.iter().any(|seen| seen == lang) {
            options.push(lang.to_string());
        }
    }
    options
}

/// Derives the filter options and the displayed list for one view state.
///
/// The sort is stable: records with equal star counts keep their order from
/// the collection.
pub fn derive_view(collection: &[RepositoryRecord], filter: &LanguageFilter) -> DerivedView {
    let options = language_options(collection);

    let mut displayed: Vec<RepositoryRecord> = collection
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    displayed.sort_by(|a, b| b.star_count.cmp(&a.star_count));

    DerivedView { options, displayed }
}
