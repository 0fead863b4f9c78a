use clap::{Parser, Subcommand};
use portfolio_site::config::PortfolioConfig;
use portfolio_site::github::API_BASE_URL;
use portfolio_site::locale::Locale;
use portfolio_site::skills::default_skills;
use portfolio_site::theme::Theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Portfolio page renderer - Skills, contact links and a live GitHub repository list")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub login whose repositories are listed
    #[arg(long, env = "GITHUB_USERNAME", default_value = "your-username", global = true)]
    pub username: String,

    /// Name shown in the page title and header
    #[arg(long, env = "PORTFOLIO_NAME", default_value = "Portfolio", global = true)]
    pub name: String,

    /// Formspree-style endpoint the contact form is relayed to
    #[arg(long, env = "FORM_ENDPOINT", global = true)]
    pub form_endpoint: Option<String>,

    /// Address offered by the copy-email button
    #[arg(long, env = "CONTACT_EMAIL", default_value = "", global = true)]
    pub email: String,

    /// Phone number for the WhatsApp button, any formatting
    #[arg(long, env = "CONTACT_PHONE", global = true)]
    pub phone: Option<String>,

    /// Language of the page text
    #[arg(long, env = "PORTFOLIO_LOCALE", value_enum, default_value_t = Locale::En, global = true)]
    pub locale: Locale,

    /// Directory holding the saved theme preference
    #[arg(long, env = "PORTFOLIO_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_BASE", default_value = API_BASE_URL, global = true)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the page once as static HTML
    Render {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Save this theme before rendering
        #[arg(long, value_enum)]
        theme: Option<Theme>,
    },
    /// Serve the page over HTTP, fetching repositories on each load
    Serve {
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    pub fn to_config(&self) -> PortfolioConfig {
        PortfolioConfig {
            owner_name: self.name.clone(),
            github_username: self.username.clone(),
            api_base: self.api_base.clone(),
            form_endpoint: self.form_endpoint.clone().filter(|e| !e.trim().is_empty()),
            email: self.email.clone(),
            phone: self.phone.clone().filter(|p| !p.trim().is_empty()),
            locale: self.locale,
            state_dir: self.state_dir.clone(),
            skills: default_skills(),
        }
    }
}
