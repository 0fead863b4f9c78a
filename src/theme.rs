use crate::capabilities::Storage;
use crate::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Interprets a stored value. Unset, empty or "dark" means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// The single persisted preference, read once at startup.
pub struct ThemeSwitch {
    storage: Arc<dyn Storage>,
    current: RwLock<Theme>,
}

impl ThemeSwitch {
    /// Loads the saved theme. An unreadable store falls back to the default.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let current = match storage.get(THEME_KEY) {
            Ok(saved) => Theme::from_stored(saved.as_deref()),
            Err(e) => {
                warn!(error = %e, "Could not read theme preference, using default");
                Theme::default()
            }
        };

        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    pub fn current(&self) -> Theme {
        self.current.read().map(|t| *t).unwrap_or_default()
    }

    /// Applies and persists `theme`.
    pub fn set(&self, theme: Theme) -> Result<Theme> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        if let Ok(mut current) = self.current.write() {
            *current = theme;
        }
        info!(theme = theme.as_str(), "Theme changed");
        Ok(theme)
    }

    pub fn toggle(&self) -> Result<Theme> {
        self.set(self.current().toggled())
    }
}
