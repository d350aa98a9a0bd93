use anyhow::Result;
use log::debug;

use crate::{
    repository::RepositoryRecord,
    runtime::Runtime,
    view::{RepositoryView, ViewState},
};

use super::config::Config;

/// Print the repository list, optionally filtered to one language.
#[tracing::instrument(skip(config))]
pub async fn repos<R: Runtime + 'static>(config: Config<R>, language: Option<String>) -> Result<()> {
    let mut view = RepositoryView::new();
    view.mount(&*config.source).await;

    if let Some(lang) = language {
        debug!("Selecting language {:?}", lang);
        view.select_language(Some(lang));
    }

    match view.state() {
        ViewState::Failed(failure) => Err(failure.clone().into()),
        state => {
            print!("{}", format_view(state));
            Ok(())
        }
    }
}

/// Plain-text rendering of a view state.
pub fn format_view(state: &ViewState) -> String {
    let mut out = String::new();
    match state {
        ViewState::Loading => out.push_str("Loading repositories...\n"),
        ViewState::Failed(failure) => out.push_str(&format!("Error: {}\n", failure)),
        ViewState::Ready(ready) => {
            out.push_str("GitHub Repositories\n");
            if ready.options().is_empty() {
                out.push_str("Languages: (none)\n");
            } else {
                out.push_str(&format!("Languages: {}\n", ready.options().join(", ")));
            }
            let selected = ready.filter().as_value();
            if !selected.is_empty() {
                out.push_str(&format!("Filter: {}\n", selected));
            }

            if ready.displayed().is_empty() {
                out.push_str("\nNo repositories found.\n");
            }
            for repo in ready.displayed() {
                out.push_str(&format_record(repo));
            }
        }
    }
    out
}

fn format_record(repo: &RepositoryRecord) -> String {
    format!(
        "\n{}\n  {}\n  {}  ⭐ {}  🔄 {}\n  {}\n",
        repo.name,
        repo.description_text(),
        repo.language_label(),
        repo.star_count,
        repo.fork_count,
        repo.url
    )
}
