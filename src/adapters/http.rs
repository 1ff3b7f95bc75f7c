use crate::utils::error::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::{Client, Response};
use serde::Serialize;

/// 以 base URL 為前綴的 REST 呼叫
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get_without_params(&self, endpoint: &str, cookie: &str) -> Result<Response> {
        let url = self.url(endpoint);
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(COOKIE, format!("Authorization={}", cookie))
            .send()
            .await?;
        tracing::debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    pub async fn post_with_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response> {
        let url = self.url(endpoint);
        let payload = serde_json::to_vec(body)?;
        tracing::debug!("POST {} ({} bytes)", url, payload.len());
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await?;
        tracing::debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }
}
