use crate::error::Result;
use crate::page::Portfolio;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    pub start_time: std::time::Instant,
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub uptime_seconds: u64,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/repos", get(repos))
        .route("/theme", post(toggle_theme))
        .route("/contact", post(contact))
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the portfolio HTTP server
pub async fn start_server(state: AppState, port: u16) -> Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Portfolio server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Full page; the repository list is fetched on every load
async fn index(State(state): State<AppState>) -> impl IntoResponse {
    state.portfolio.refresh_repos().await;
    Html(state.portfolio.render_page(None).await)
}

/// Repository list fragment only
async fn repos(State(state): State<AppState>) -> impl IntoResponse {
    state.portfolio.refresh_repos().await;
    Html(state.portfolio.repo_fragment().await)
}

async fn toggle_theme(State(state): State<AppState>) -> impl IntoResponse {
    match state.portfolio.toggle_theme().await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            error!(error = %e, "Failed to persist theme");
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not save theme preference").into_response()
        }
    }
}

/// Relays the contact form and re-renders the page with the outcome
async fn contact(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> impl IntoResponse {
    let fields: Vec<(String, String)> = fields.into_iter().collect();
    let status = state.portfolio.submit_contact(&fields).await;
    Html(state.portfolio.render_page(Some(&status)).await)
}

/// Liveness probe - just checks if the process is alive
async fn liveness_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
        }),
    )
}
