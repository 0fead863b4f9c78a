//! The repository list shown on the portfolio page.
//!
//! `RemoteListWidget::render` fetches the most recently updated repositories
//! of a GitHub user and rewrites its `RenderTarget` with either a full list of
//! cards or a single placeholder message. A pass never leaves a partial list.

use crate::capabilities::{Fetcher, Navigator};
use crate::dom::{Element, Node};
use crate::error::{PortfolioError, Result};
use crate::github::{decode_records, repos_url, validate_identifier, API_BASE_URL};
use crate::locale::Locale;
use crate::types::Record;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const REPO_LIST_ID: &str = "repo-list";

/// Why a pass ended without cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFailure {
    RateLimited(u16),
    NotFound(u16),
    Upstream(u16),
    Transport,
}

/// Terminal (or in-flight) state of the last pass written to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Loading,
    Unconfigured,
    Failed(ListFailure),
    Empty,
    Populated(usize),
}

/// Container owned by the widget. Every write replaces all children.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    id: String,
    children: Vec<Node>,
    state: RenderState,
    generation: u64,
}

impl RenderTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
            state: RenderState::Idle,
            generation: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Generation of the pass that produced the current content.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn replace(&mut self, children: Vec<Node>, state: RenderState, generation: u64) {
        self.children = children;
        self.state = state;
        self.generation = generation;
    }

    /// Activatable repository cards, in display order.
    pub fn cards(&self) -> Vec<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(|el| el.get_attr("data-href").is_some())
            .collect()
    }

    pub fn text_content(&self) -> String {
        self.to_element().text_content()
    }

    pub fn to_element(&self) -> Element {
        Element::new("div")
            .id(self.id.clone())
            .class("repo-list")
            .attr("aria-live", "polite")
            .children_from(self.children.iter().cloned())
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.write_html(&mut out));
        out
    }

    /// Delivers `event` to the card at `index`.
    pub fn dispatch(&self, index: usize, event: &CardEvent, navigator: &dyn Navigator) -> Activation {
        match self.cards().get(index) {
            Some(card) => activate_card(card, event, navigator),
            None => Activation::Ignored,
        }
    }
}

/// Fetches and renders a user's recently updated repositories.
pub struct RemoteListWidget {
    fetcher: Arc<dyn Fetcher>,
    target: Arc<Mutex<RenderTarget>>,
    api_base: String,
    locale: Locale,
    generation: AtomicU64,
}

impl RemoteListWidget {
    pub fn new(fetcher: Arc<dyn Fetcher>, locale: Locale) -> Self {
        Self {
            fetcher,
            target: Arc::new(Mutex::new(RenderTarget::new(REPO_LIST_ID))),
            api_base: API_BASE_URL.to_string(),
            locale,
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn target(&self) -> Arc<Mutex<RenderTarget>> {
        Arc::clone(&self.target)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Renders the repository list for `identifier` into the target.
    ///
    /// Placeholder identifiers never reach the network. Every failure is
    /// turned into a placeholder message; nothing propagates to the caller.
    /// When passes overlap, only the most recently started one may write its
    /// result.
    pub async fn render(&self, identifier: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let messages = self.locale.messages();

        let login = match validate_identifier(identifier) {
            Ok(login) => login,
            Err(e) => {
                warn!(error = %e, "Repository list not configured");
                self.write(generation, vec![placeholder(messages.unconfigured, false)], RenderState::Unconfigured)
                    .await;
                return;
            }
        };

        self.write(generation, vec![loader()], RenderState::Loading).await;

        let (children, state) = match self.fetch(login).await {
            Ok(records) if records.is_empty() => (vec![placeholder(messages.empty, false)], RenderState::Empty),
            Ok(records) => {
                let count = records.len();
                let cards = records
                    .iter()
                    .map(|r| Node::from(repo_card(r, self.locale)))
                    .collect();
                (cards, RenderState::Populated(count))
            }
            Err(PortfolioError::RateLimited(status)) => (
                vec![placeholder(&messages.rate_limited(status), true)],
                RenderState::Failed(ListFailure::RateLimited(status)),
            ),
            Err(PortfolioError::NotFound(status)) => (
                vec![placeholder(&messages.not_found(status), true)],
                RenderState::Failed(ListFailure::NotFound(status)),
            ),
            Err(PortfolioError::Upstream(status)) => (
                vec![placeholder(&messages.upstream(status), true)],
                RenderState::Failed(ListFailure::Upstream(status)),
            ),
            Err(e) => {
                error!(error = %e, login, "GitHub fetch failed");
                (
                    vec![placeholder(messages.transport_failure, true)],
                    RenderState::Failed(ListFailure::Transport),
                )
            }
        };

        if self.write(generation, children, state).await {
            info!(login, ?state, "Repository list rendered");
        }
    }

    async fn fetch(&self, login: &str) -> Result<Vec<Record>> {
        let url = repos_url(&self.api_base, login)?;
        let response = self.fetcher.get(&url).await?;

        if !response.is_success() {
            error!(
                status = response.status,
                reason = response.reason.as_deref().unwrap_or(""),
                "GitHub fetch error"
            );
            return Err(PortfolioError::from_status(response.status));
        }

        decode_records(&response.body)
    }

    /// Replaces the target's content unless a newer pass has started.
    async fn write(&self, generation: u64, children: Vec<Node>, state: RenderState) -> bool {
        let mut target = self.target.lock().await;
        let latest = self.generation.load(Ordering::SeqCst);
        if generation < latest {
            debug!(generation, latest, ?state, "Discarding stale repository list");
            return false;
        }
        target.replace(children, state, generation);
        true
    }
}

fn loader() -> Node {
    Element::new("div").class("loader small").into()
}

fn placeholder(message: &str, is_error: bool) -> Node {
    let class = if is_error { "repo error" } else { "repo" };
    Element::new("div").class(class).text(message).into()
}

/// Builds the card for one repository.
pub fn repo_card(record: &Record, locale: Locale) -> Element {
    let messages = locale.messages();
    let language = record.primary_language.as_deref().unwrap_or("—");
    let meta = format!(
        "★ {} • {} • {}: {}",
        record.star_count,
        language,
        messages.updated_label,
        locale.format_date(&record.updated_at)
    );

    let mut card = Element::new("div")
        .class("repo fade-in")
        .attr("data-href", record.url.clone())
        .attr("tabindex", "0")
        .child(
            Element::new("a")
                .attr("href", record.url.clone())
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text(record.name.clone()),
        )
        .child(Element::new("div").class("meta").text(meta));

    if let Some(description) = &record.description {
        card = card.child(Element::new("div").class("muted description").text(description.clone()));
    }

    card
}

/// Interaction delivered to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    /// Pointer activation; `on_link` is set when the click landed on the
    /// card's embedded anchor.
    Click { on_link: bool },
    KeyDown(String),
}

impl CardEvent {
    pub fn key(key: impl Into<String>) -> Self {
        CardEvent::KeyDown(key.into())
    }
}

/// What an event on a card did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The card handler opened the record URL.
    Card(String),
    /// The embedded anchor was followed.
    Link(String),
    Ignored,
}

/// Applies card activation rules, opening at most one browsing context.
///
/// Clicks on the anchor follow the anchor and the card handler stays out of
/// the way. Any other click, or Enter/Space while focused, opens the card's
/// URL detached from the opener.
pub fn activate_card(card: &Element, event: &CardEvent, navigator: &dyn Navigator) -> Activation {
    let Some(href) = card.get_attr("data-href") else {
        return Activation::Ignored;
    };

    match event {
        CardEvent::Click { on_link: true } => {
            let link = card
                .find(&|el| el.tag() == "a")
                .and_then(|a| a.get_attr("href"))
                .unwrap_or(href);
            navigator.open_detached(link);
            Activation::Link(link.to_string())
        }
        CardEvent::Click { on_link: false } => {
            navigator.open_detached(href);
            Activation::Card(href.to_string())
        }
        CardEvent::KeyDown(key) if key == "Enter" || key == " " => {
            navigator.open_detached(href);
            Activation::Card(href.to_string())
        }
        CardEvent::KeyDown(_) => Activation::Ignored,
    }
}
