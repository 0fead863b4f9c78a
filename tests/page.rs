mod common;

use common::{repo_json, MockFetcher};
use portfolio_site::capabilities::{MemoryStorage, Storage};
use portfolio_site::config::PortfolioConfig;
use portfolio_site::locale::Locale;
use portfolio_site::page::Portfolio;
use portfolio_site::skills::{default_skills, render_skills, sorted, Skill};
use portfolio_site::theme::{Theme, THEME_KEY};
use serde_json::json;
use std::sync::Arc;

fn config() -> PortfolioConfig {
    PortfolioConfig {
        owner_name: "Ada <Lovelace>".to_string(),
        github_username: "realuser".to_string(),
        form_endpoint: Some("https://formspree.io/f/abc123".to_string()),
        email: "ada@example.com".to_string(),
        phone: Some("+44 20 7946 0958".to_string()),
        ..PortfolioConfig::default()
    }
}

#[test]
fn test_skills_sorted_by_level_then_name() {
    let names: Vec<String> = sorted(&default_skills()).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["HTML", "Java", "C++", "CSS", "JavaScript"]);

    let ties = vec![Skill::new("rust", 50), Skill::new("Go", 50), Skill::new("ada", 50)];
    let names: Vec<String> = sorted(&ties).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["ada", "Go", "rust"]);
}

#[test]
fn test_skill_markup() {
    let list = render_skills(&[Skill::new("Rust", 120)]);
    assert_eq!(list.get_attr("id"), Some("skills-list"));

    let skill = list.find(&|el| el.has_class("skill")).expect("skill");
    assert_eq!(skill.get_attr("aria-label"), Some("Rust: 100%"));
    assert_eq!(skill.get_attr("data-level"), Some("100"));
    assert_eq!(skill.get_attr("role"), Some("group"));
    let bar = skill.find(&|el| el.tag() == "i").expect("bar");
    assert_eq!(bar.get_attr("style"), Some("width:100%"));
}

#[tokio::test]
async fn test_page_includes_all_sections() {
    let fetcher = Arc::new(MockFetcher::new().respond_json(200, json!([repo_json("alpha", None, 4, Some("Rust"))])));
    let portfolio = Portfolio::new(config(), fetcher.clone(), Arc::new(MemoryStorage::new()));

    portfolio.refresh_repos().await;
    let html = portfolio.render_page(None).await;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<body class=\"theme-dark\">"));
    assert!(html.contains("<title>Ada &lt;Lovelace&gt;</title>"));
    assert!(html.contains("id=\"skills-list\""));
    assert!(html.contains("id=\"repo-list\""));
    assert!(html.contains("data-href=\"https://github.com/realuser/alpha\""));
    assert!(html.contains("data-form-endpoint=\"https://formspree.io/f/abc123\""));
    assert!(html.contains("data-email=\"ada@example.com\""));
    assert!(html.contains("href=\"https://wa.me/442079460958?text=Hello\""));
    assert_eq!(fetcher.get_calls().len(), 1);
}

#[tokio::test]
async fn test_render_page_does_not_fetch() {
    let fetcher = Arc::new(MockFetcher::new());
    let portfolio = Portfolio::new(config(), fetcher.clone(), Arc::new(MemoryStorage::new()));

    let html = portfolio.render_page(None).await;

    assert!(html.contains("id=\"repo-list\""));
    assert!(fetcher.get_calls().is_empty());
}

#[tokio::test]
async fn test_toggle_theme_persists_and_rerenders() {
    let storage = Arc::new(MemoryStorage::new());
    let fetcher = Arc::new(
        MockFetcher::new()
            .respond_json(200, json!([]))
            .respond_json(200, json!([repo_json("after-toggle", None, 0, None)])),
    );
    let portfolio = Portfolio::new(config(), fetcher.clone(), storage.clone());

    portfolio.refresh_repos().await;
    assert_eq!(portfolio.toggle_theme().await.expect("toggle"), Theme::Light);

    assert_eq!(storage.get(THEME_KEY).expect("get"), Some("light".to_string()));
    assert_eq!(fetcher.get_calls().len(), 2);

    let html = portfolio.render_page(None).await;
    assert!(html.contains("<body>"));
    assert!(html.contains("after-toggle"));
}

#[tokio::test]
async fn test_saved_light_theme_is_read_at_startup() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(THEME_KEY, "light").expect("set");

    let portfolio = Portfolio::new(config(), Arc::new(MockFetcher::new()), storage);
    assert_eq!(portfolio.theme(), Theme::Light);
}

#[tokio::test]
async fn test_form_status_is_rendered() {
    let fetcher = Arc::new(MockFetcher::new().respond_json(200, json!({"ok": true})));
    let mut config = config();
    config.locale = Locale::Tr;
    let portfolio = Portfolio::new(config, fetcher, Arc::new(MemoryStorage::new()));

    let status = portfolio
        .submit_contact(&[("message".to_string(), "Selam".to_string())])
        .await;
    let html = portfolio.render_page(Some(&status)).await;

    assert!(html.contains("<html lang=\"tr\">"));
    assert!(html.contains("class=\"form-status success\""));
    assert!(html.contains("Mesaj gönderildi"));
}

#[tokio::test]
async fn test_missing_contact_details() {
    let mut config = config();
    config.email = String::new();
    config.phone = None;
    let portfolio = Portfolio::new(config, Arc::new(MockFetcher::new()), Arc::new(MemoryStorage::new()));

    let html = portfolio.render_page(None).await;

    assert!(!html.contains("id=\"copy-email\""));
    assert!(html.contains("Number not set"));
}
