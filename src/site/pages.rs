//! Page bodies: the landing page and the repository view.

use crate::repository::RepositoryRecord;
use crate::view::{LanguageFilter, ReadyView, ViewState};

use super::html::{escape, render_document};
use super::theme::Theme;

/// A generated route and the file it is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub output: &'static str,
}

pub const HOME_ROUTE: Route = Route {
    path: "/",
    output: "index.html",
};

pub const REPOS_ROUTE: Route = Route {
    path: "/repos",
    output: "repos/index.html",
};

pub fn render_home_page(theme: Theme) -> String {
    let body = r#"<div class="hero">
<h1>Welcome to ogerly.dev</h1>
<p>Personal portfolio and projects</p>
</div>"#;
    render_document("ogerly.dev", theme, body)
}

pub fn render_repos_page(state: &ViewState, theme: Theme) -> String {
    render_document("GitHub Repos | ogerly.dev", theme, &render_repository_view(state))
}

/// Renders the repository list for any view state.
pub fn render_repository_view(state: &ViewState) -> String {
    match state {
        ViewState::Loading => {
            r#"<div class="loading"><div>Loading repositories...</div></div>"#.to_string()
        }
        ViewState::Failed(failure) => format!(
            r#"<div class="error">Error: {}</div>"#,
            escape(failure.message())
        ),
        ViewState::Ready(ready) => render_ready(ready),
    }
}

fn render_ready(ready: &ReadyView) -> String {
    let cards: Vec<String> = ready.displayed().iter().map(render_card).collect();
    format!(
        r#"<h2>GitHub Repositories</h2>
{filter}
<div class="repo-grid">
{cards}
</div>"#,
        filter = render_filter(ready.options(), ready.filter()),
        cards = cards.join("\n"),
    )
}

fn render_filter(options: &[String], selected: &LanguageFilter) -> String {
    let mut html = String::from(
        r#"<div class="repo-filter">
<select id="language-filter">
"#,
    );
    html.push_str(&render_option("", "All Languages", selected.as_value()));
    for lang in options {
        html.push_str(&render_option(lang, lang, selected.as_value()));
    }
    html.push_str("</select>\n</div>");
    html
}

fn render_option(value: &str, label: &str, selected: &str) -> String {
    let selected_attr = if value == selected { " selected" } else { "" };
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        escape(value),
        selected_attr,
        escape(label)
    )
}

fn render_card(repo: &RepositoryRecord) -> String {
    format!(
        r#"<div class="repo-card" data-repo-id="{id}" data-language="{data_language}">
<h3><a href="{url}" target="_blank" rel="noopener noreferrer">{name}</a></h3>
<p>{description}</p>
<div class="repo-meta">
<span>{language}</span>
<span>⭐ {stars}</span>
<span>🔄 {forks}</span>
</div>
</div>"#,
        id = repo.id,
        data_language = escape(repo.language().unwrap_or_default()),
        url = escape(&repo.url),
        name = escape(&repo.name),
        description = escape(repo.description_text()),
        language = escape(repo.language_label()),
        stars = repo.star_count,
        forks = repo.fork_count,
    )
}
