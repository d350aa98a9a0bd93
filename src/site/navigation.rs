//! Site navigation bar.

use super::html::escape;
use super::theme::Theme;

/// Site name, linked to the landing page.
pub const BRAND: &str = "ogerly.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "GitHub Repos",
        href: "/repos",
    },
    NavItem {
        name: "Social Feed",
        href: "/social",
    },
    NavItem {
        name: "Blog",
        href: "/blog",
    },
    NavItem {
        name: "Playground",
        href: "/playground",
    },
    NavItem {
        name: "NOSTR",
        href: "/nostr",
    },
];

pub fn render_navigation(theme: Theme) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|item| format!(r#"<a href="{}">{}</a>"#, escape(item.href), escape(item.name)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<nav>
<div class="bar">
<div>
<a class="brand" href="/">{brand}</a>
{links}
</div>
<button type="button" id="theme-toggle" aria-label="Toggle dark mode">{icon}</button>
</div>
</nav>"#,
        brand = escape(BRAND),
        icon = theme.toggle_icon(),
    )
}
