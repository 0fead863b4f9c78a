use crate::capabilities::{FetchResponse, Fetcher};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// `Fetcher` backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(HttpFetcher { client })
    }

    async fn into_fetch_response(response: Response) -> Result<FetchResponse> {
        let status = response.status();
        let body = response.text().await?;
        Ok(FetchResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        Self::into_fetch_response(response).await
    }

    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> Result<FetchResponse> {
        debug!(url, fields = fields.len(), "POST form");
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .form(fields)
            .send()
            .await?;

        Self::into_fetch_response(response).await
    }
}
