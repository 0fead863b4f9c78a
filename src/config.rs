use crate::capabilities::{FileStorage, MemoryStorage, Storage};
use crate::github::API_BASE_URL;
use crate::locale::Locale;
use crate::skills::{default_skills, Skill};
use std::path::PathBuf;
use std::sync::Arc;

pub const THEME_FILE: &str = "theme.json";

/// Everything the page needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub owner_name: String,
    pub github_username: String,
    pub api_base: String,
    pub form_endpoint: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub locale: Locale,
    pub state_dir: Option<PathBuf>,
    pub skills: Vec<Skill>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            owner_name: "Portfolio".to_string(),
            github_username: "your-username".to_string(),
            api_base: API_BASE_URL.to_string(),
            form_endpoint: None,
            email: String::new(),
            phone: None,
            locale: Locale::default(),
            state_dir: None,
            skills: default_skills(),
        }
    }
}

impl PortfolioConfig {
    /// Preference store for the theme flag: a JSON file under `state_dir`,
    /// or process memory when no directory is configured.
    pub fn storage(&self) -> Arc<dyn Storage> {
        match &self.state_dir {
            Some(dir) => Arc::new(FileStorage::new(dir.join(THEME_FILE))),
            None => Arc::new(MemoryStorage::new()),
        }
    }
}
