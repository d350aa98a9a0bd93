//! HTML escaping and the shared page layout.

use super::navigation::render_navigation;
use super::theme::{DocumentRoot, Theme, sync_document_theme};

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #fff; color: #111827; }
html.dark body { background: #111827; color: #f3f4f6; }
nav { background: #f3f4f6; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
html.dark nav { background: #1f2937; }
nav .bar { display: flex; align-items: center; justify-content: space-between; height: 4rem; max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
nav a { color: inherit; text-decoration: none; padding: .5rem .75rem; border-radius: .375rem; }
nav a.brand { font-weight: 700; font-size: 1.25rem; }
nav button { background: none; border: 0; font-size: 1.25rem; cursor: pointer; }
main { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.hero { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; }
.repo-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.repo-card { background: #fff; border-radius: .5rem; box-shadow: 0 4px 6px rgba(0,0,0,.1); padding: 1.5rem; }
html.dark .repo-card { background: #1f2937; }
.repo-card a { color: #2563eb; }
html.dark .repo-card a { color: #60a5fa; }
.repo-meta { display: flex; gap: 1rem; font-size: .875rem; }
.error { color: #ef4444; background: #fef2f2; padding: 1rem; border-radius: .375rem; }
html.dark .error { background: rgba(127,29,29,.2); }
.loading { display: flex; justify-content: center; padding: 2rem; color: #6b7280; }
"#;

const SCRIPT: &str = r#"
(function () {
  var root = document.documentElement;
  var toggle = document.getElementById('theme-toggle');
  if (toggle) {
    toggle.addEventListener('click', function () {
      var dark = root.classList.toggle('dark');
      toggle.textContent = dark ? '\u{1F31E}' : '\u{1F319}';
    });
  }
  var filter = document.getElementById('language-filter');
  if (filter) {
    filter.addEventListener('change', function () {
      var lang = filter.value;
      document.querySelectorAll('[data-repo-id]').forEach(function (card) {
        card.hidden = lang !== '' && card.dataset.language !== lang;
      });
    });
  }
})();
"#;

/// Wraps `body` in a complete document with navigation and theme applied.
pub fn render_document(title: &str, theme: Theme, body: &str) -> String {
    let mut root = DocumentRoot::default();
    sync_document_theme(&mut root, theme);

    let class_attr = if root.class_attr().is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, escape(&root.class_attr()))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en"{class_attr}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{nav}
<main>
{body}
</main>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        title = escape(title),
        nav = render_navigation(theme),
    )
}
