mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use colored::*;
use portfolio_site::http::HttpFetcher;
use portfolio_site::page::Portfolio;
use portfolio_site::server::{start_server, AppState};
use portfolio_site::RenderState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    let storage = config.storage();
    let fetcher = Arc::new(HttpFetcher::new().context("Failed to build HTTP client")?);
    let portfolio = Arc::new(Portfolio::new(config, fetcher, storage));

    match cli.command {
        Command::Render { output, theme } => {
            if let Some(theme) = theme {
                portfolio.set_theme(theme).context("Failed to save theme")?;
            }

            portfolio.refresh_repos().await;
            let state = portfolio.widget().target().lock().await.state();
            let html = portfolio.render_page(None).await;

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("{} {}", "✅ Wrote".green(), path.display());
                }
                None => println!("{}", html),
            }

            match state {
                RenderState::Populated(count) => {
                    eprintln!("📦 {} repositories for {}", count, cli.username.bold());
                }
                RenderState::Unconfigured => {
                    eprintln!("{}", "⚠️ GitHub username not configured (GITHUB_USERNAME)".yellow());
                }
                RenderState::Failed(failure) => {
                    eprintln!("{} {:?}", "⚠️ Repository list failed:".yellow(), failure);
                }
                other => eprintln!("Repository list: {:?}", other),
            }
        }
        Command::Serve { port } => {
            eprintln!("{}", "Portfolio Server".bold().green());
            eprintln!("{}\n", "=".repeat(50).dimmed());
            eprintln!("🌐 http://localhost:{}", port);
            eprintln!("\nPress Ctrl+C to stop the server\n");

            let state = AppState {
                portfolio,
                start_time: std::time::Instant::now(),
            };

            tokio::select! {
                result = start_server(state, port) => {
                    result.context("Server stopped unexpectedly")?;
                }
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("\n🛑 Shutting down server...");
                }
            }

            eprintln!("✅ Server stopped");
        }
    }

    Ok(())
}
