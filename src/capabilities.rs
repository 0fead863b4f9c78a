//! Injected stand-ins for the browser globals the page relies on.
//!
//! Components never reach for a network client, preference store, clipboard
//! or window directly; they take one of these traits so tests can drive them
//! with fakes.

use crate::error::{PortfolioError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Outbound HTTP. Errors are transport-level only; any status is `Ok`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse>;

    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<FetchResponse>;
}

/// String key/value preference store.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Opens URLs in a new browsing context that holds no reference back to the
/// opener.
pub trait Navigator: Send + Sync {
    fn open_detached(&self, url: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| PortfolioError::Storage(format!("lock poisoned: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| PortfolioError::Storage(format!("lock poisoned: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference store backed by a single JSON object on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| PortfolioError::Storage(format!("lock poisoned: {}", e)))?;

        let mut values = match self.load() {
            Ok(values) => values,
            Err(PortfolioError::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable preference file");
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        // Replace the file atomically so a crash mid-write leaves the old copy
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(serde_json::to_string_pretty(&values)?.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| PortfolioError::Io(e.error))?;
        debug!(path = %self.path.display(), key, "Preference saved");
        Ok(())
    }
}

/// Clipboard that keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| PortfolioError::Clipboard(format!("lock poisoned: {}", e)))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
