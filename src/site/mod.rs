//! Static HTML rendering of the portfolio site.
//!
//! - `html` - escaping and the shared document layout
//! - `navigation` - the navigation bar
//! - `pages` - landing page and repository view
//! - `theme` - light/dark theme value and its document synchronisation

mod html;
mod navigation;
mod pages;
mod theme;

pub use html::{escape, render_document};
pub use navigation::{BRAND, NAV_ITEMS, NavItem, render_navigation};
pub use pages::{
    HOME_ROUTE, REPOS_ROUTE, Route, render_home_page, render_repos_page, render_repository_view,
};
pub use theme::{DARK_CLASS, DocumentRoot, Theme, sync_document_theme};
