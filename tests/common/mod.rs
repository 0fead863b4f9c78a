#![allow(dead_code)]

use async_trait::async_trait;
use portfolio_site::capabilities::{Clipboard, FetchResponse, Fetcher, Navigator};
use portfolio_site::error::{PortfolioError, Result};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub const UPDATED_AT: &str = "2024-03-05T10:00:00Z";

/// `UPDATED_AT` as the host's local calendar date in `format`.
pub fn local_updated_date(format: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(UPDATED_AT)
        .expect("valid timestamp")
        .with_timezone(&chrono::Local)
        .format(format)
        .to_string()
}

enum Reply {
    Response(FetchResponse),
    TransportError(String),
}

struct Scripted {
    delay: Duration,
    reply: Reply,
}

/// Fetcher that replays scripted replies in call order and records every
/// request it sees.
#[derive(Default)]
pub struct MockFetcher {
    replies: Mutex<VecDeque<Scripted>>,
    gets: Mutex<Vec<String>>,
    posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.respond_after(Duration::ZERO, status, body)
    }

    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond(status, body.to_string())
    }

    pub fn respond_after(self, delay: Duration, status: u16, body: impl Into<String>) -> Self {
        self.push(delay, Reply::Response(FetchResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.push(Duration::ZERO, Reply::TransportError(message.to_string()));
        self
    }

    fn push(&self, delay: Duration, reply: Reply) {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Scripted { delay, reply });
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.gets.lock().expect("gets lock").clone()
    }

    pub fn post_calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.posts.lock().expect("posts lock").clone()
    }

    async fn next_reply(&self) -> Result<FetchResponse> {
        let scripted = self.replies.lock().expect("replies lock").pop_front();
        let Some(scripted) = scripted else {
            return Err(PortfolioError::Transport("no scripted reply".to_string()));
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }

        match scripted.reply {
            Reply::Response(response) => Ok(response),
            Reply::TransportError(message) => Err(PortfolioError::Transport(message)),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        self.gets.lock().expect("gets lock").push(url.to_string());
        self.next_reply().await
    }

    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<FetchResponse> {
        self.posts
            .lock()
            .expect("posts lock")
            .push((url.to_string(), fields.to_vec()));
        self.next_reply().await
    }
}

/// Navigator that remembers every URL it was asked to open.
#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("opened lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_detached(&self, url: &str) {
        self.opened.lock().expect("opened lock").push(url.to_string());
    }
}

pub struct DeniedClipboard;

#[async_trait]
impl Clipboard for DeniedClipboard {
    async fn write_text(&self, _text: &str) -> Result<()> {
        Err(PortfolioError::Clipboard("permission denied".to_string()))
    }
}

pub fn repo_json(name: &str, description: Option<&str>, stars: u64, language: Option<&str>) -> Value {
    json!({
        "name": name,
        "full_name": format!("realuser/{}", name),
        "html_url": format!("https://github.com/realuser/{}", name),
        "description": description,
        "stargazers_count": stars,
        "language": language,
        "updated_at": UPDATED_AT,
        "fork": false
    })
}

pub fn three_repos() -> Value {
    json!([
        repo_json("alpha", Some("First project"), 12, Some("Rust")),
        repo_json("beta", None, 0, None),
        repo_json("gamma", Some("Uses <b>bold</b> & \"quotes\""), 3, Some("Java")),
    ])
}
