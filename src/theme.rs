use crate::errors::StorageError;
use crate::storage::KeyValueStore;
use crate::view::Document;
use std::fmt;
use std::str::FromStr;
use tracing::info;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        })
    }
}

pub struct ThemeController<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn saved(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Applies the saved theme to the document. Must run before anything is drawn.
    pub fn init(&self, document: &mut Document) -> Theme {
        let theme = self.saved();
        document.theme = Some(theme);
        theme
    }

    pub async fn toggle(&mut self, document: &mut Document) -> Result<Theme, StorageError> {
        // An unset attribute counts as dark.
        let next = document.theme.map_or(Theme::Light, |current| current.opposite());
        self.store.set(THEME_KEY, next.as_str()).await?;
        document.theme = Some(next);
        info!(theme = %next, "theme changed");
        Ok(next)
    }
}
