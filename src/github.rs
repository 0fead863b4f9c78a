use crate::error::{PortfolioError, Result};
use crate::types::{GitHubRepo, Record};
use serde_json::Value;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 5;
const MAX_LOGIN_LEN: usize = 39;

/// Checks that `identifier` looks like a configured GitHub login and returns
/// it trimmed.
///
/// Unconfigured defaults (`your-username`, `<user>`, `{user}`) and anything
/// outside login syntax are rejected before any request is built.
pub fn validate_identifier(identifier: &str) -> Result<&str> {
    let login = identifier.trim();

    if login.is_empty() {
        return Err(PortfolioError::InvalidIdentifier("identifier is empty".to_string()));
    }

    if login.to_ascii_lowercase().contains("your-")
        || (login.starts_with('<') && login.ends_with('>'))
        || (login.starts_with('{') && login.ends_with('}'))
    {
        return Err(PortfolioError::InvalidIdentifier(format!(
            "placeholder identifier: {}",
            login
        )));
    }

    if login.len() > MAX_LOGIN_LEN
        || login.starts_with('-')
        || !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(PortfolioError::InvalidIdentifier(format!(
            "not a GitHub login: {}",
            login
        )));
    }

    Ok(login)
}

/// Builds the "recently updated repositories" URL for `login`.
pub fn repos_url(base: &str, login: &str) -> Result<String> {
    let mut url = Url::parse(base)
        .map_err(|e| PortfolioError::Config(format!("Invalid API base URL {}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| PortfolioError::Config(format!("API base URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(["users", login, "repos"]);

    url.query_pairs_mut()
        .append_pair("sort", "updated")
        .append_pair("per_page", &PER_PAGE.to_string());

    Ok(url.into())
}

/// Decodes a repository listing body.
///
/// A body that is valid JSON but not an array yields no records; an array
/// with malformed entries is an error.
pub fn decode_records(body: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let repo: GitHubRepo = serde_json::from_value(item)?;
        records.push(Record::from(repo));
    }

    Ok(records)
}

