//! Light/dark theme as an explicit value.
//!
//! [`Theme::toggled`] is a pure transition. The only side effect,
//! reflecting the theme on the document root's class list, lives in
//! [`sync_document_theme`].

use std::fmt;
use std::str::FromStr;

/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon on the toggle button.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌞",
            Theme::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => anyhow::bail!("Unknown theme: {}. Expected light or dark.", s),
        }
    }
}

/// Class list of the document's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: Vec<String>,
}

impl DocumentRoot {
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut root = Self::default();
        for class in classes {
            let class: String = class.into();
            root.add(&class);
        }
        root
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Value of the `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// Makes `root` carry the dark class exactly when `theme` is dark.
pub fn sync_document_theme(root: &mut DocumentRoot, theme: Theme) {
    if theme.is_dark() {
        root.add(DARK_CLASS);
    } else {
        root.remove(DARK_CLASS);
    }
}
