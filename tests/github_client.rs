use portfolio_site::capabilities::Fetcher;
use portfolio_site::error::PortfolioError;
use portfolio_site::github::{decode_records, repos_url, validate_identifier, API_BASE_URL};
use portfolio_site::http::HttpFetcher;
use portfolio_site::locale::Locale;
use portfolio_site::widget::{RemoteListWidget, RenderState};
use std::sync::Arc;

#[test]
fn test_http_fetcher_creation() {
    let fetcher = HttpFetcher::new();
    assert!(fetcher.is_ok());
}

#[test]
fn test_repos_url_shape() {
    let url = repos_url(API_BASE_URL, "octocat").expect("url");
    assert_eq!(url, "https://api.github.com/users/octocat/repos?sort=updated&per_page=5");
}

#[test]
fn test_repos_url_with_custom_base() {
    let url = repos_url("http://127.0.0.1:9000/", "octocat").expect("url");
    assert_eq!(url, "http://127.0.0.1:9000/users/octocat/repos?sort=updated&per_page=5");

    let result = repos_url("not a url", "octocat");
    assert!(matches!(result, Err(PortfolioError::Config(_))));
}

#[test]
fn test_validate_identifier() {
    assert_eq!(validate_identifier("  realuser ").expect("valid"), "realuser");
    assert_eq!(validate_identifier("rust-lang").expect("valid"), "rust-lang");

    for bad in ["", "   ", "your-username", "YOUR-NAME", "<username>", "{username}", "a/b", "-leading", "a b"] {
        match validate_identifier(bad) {
            Err(PortfolioError::InvalidIdentifier(_)) => {}
            other => panic!("Expected InvalidIdentifier for {:?}, got: {:?}", bad, other),
        }
    }

    assert!(validate_identifier(&"a".repeat(39)).is_ok());
    assert!(validate_identifier(&"a".repeat(40)).is_err());
}

#[test]
fn test_decode_non_array_is_empty() {
    assert!(decode_records(r#"{"message":"Not Found"}"#).expect("decode").is_empty());
    assert!(decode_records("[]").expect("decode").is_empty());
}

#[test]
fn test_decode_malformed_entry_is_error() {
    let result = decode_records(r#"[{"name": 1}]"#);
    assert!(matches!(result, Err(PortfolioError::Json(_))));

    let result = decode_records("<html>");
    assert!(matches!(result, Err(PortfolioError::Json(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let fetcher = HttpFetcher::new().expect("Failed to create fetcher");
    let result = fetcher.get("http://127.0.0.1:1/users/x/repos").await;
    assert!(matches!(result, Err(PortfolioError::Network(_))));
}

#[tokio::test]
#[ignore = "Requires network access to api.github.com"]
async fn test_live_repository_list() {
    let fetcher = Arc::new(HttpFetcher::new().expect("Failed to create fetcher"));
    let widget = RemoteListWidget::new(fetcher, Locale::En);

    widget.render("octocat").await;

    let target = widget.target();
    let target = target.lock().await;
    match target.state() {
        RenderState::Populated(count) => {
            assert!(count <= 5);
            assert_eq!(target.cards().len(), count);
        }
        other => panic!("Expected populated list, got: {:?}", other),
    }
}
