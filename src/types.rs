use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// One repository as displayed on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub star_count: u64,
    pub primary_language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<GitHubRepo> for Record {
    fn from(repo: GitHubRepo) -> Self {
        Record {
            name: repo.name,
            url: repo.html_url,
            // GitHub sends "" for some cleared descriptions
            description: repo.description.filter(|d| !d.trim().is_empty()),
            star_count: repo.stargazers_count,
            primary_language: repo.language.filter(|l| !l.is_empty()),
            updated_at: repo.updated_at,
        }
    }
}
