use crate::domain::model::{BuildInfo, InfoOutcome};
use crate::utils::error::{HarnessError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// 查詢服務的 info 端點，每次只送一個請求，不重試
#[derive(Debug, Clone, Default)]
pub struct InfoFetcher {
    client: Client,
}

impl InfoFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// 非 200 或連不上都是正常結果 (`NoResponse`)；
    /// 200 但內容缺欄位則回傳 `MalformedBuildInfo`。
    pub async fn fetch(&self, url: &str) -> Result<InfoOutcome> {
        tracing::debug!("Requesting build info from: {}", url);

        let response = match self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("No response from {}: {}", url, e);
                return Ok(no_response(url));
            }
        };

        tracing::debug!("Info response status from {}: {}", url, response.status());
        if response.status() != StatusCode::OK {
            return Ok(no_response(url));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read body from {}: {}", url, e);
                return Ok(no_response(url));
            }
        };
        tracing::info!("{}", body);

        parse_build_info(url, &body).map(InfoOutcome::Build)
    }

    pub async fn fetch_path(&self, base_url: &str, path: &str) -> Result<InfoOutcome> {
        self.fetch(&info_url(base_url, path)).await
    }
}

pub fn info_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn no_response(url: &str) -> InfoOutcome {
    InfoOutcome::NoResponse {
        url: url.to_string(),
    }
}

pub fn parse_build_info(url: &str, body: &str) -> Result<BuildInfo> {
    let json: Value = serde_json::from_str(body).map_err(|e| HarnessError::MalformedBuildInfo {
        url: url.to_string(),
        reason: format!("invalid JSON ({})", e),
    })?;

    Ok(BuildInfo {
        group: required_str(url, &json, "/build/group")?,
        artifact: required_str(url, &json, "/build/artifact")?,
        version: required_str(url, &json, "/build/version")?,
        commit_id: required_str(url, &json, "/git/commit/id")?,
    })
}

fn required_str(url: &str, json: &Value, pointer: &str) -> Result<String> {
    json.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| HarnessError::MalformedBuildInfo {
            url: url.to_string(),
            reason: format!("missing {}", pointer.trim_start_matches('/').replace('/', ".")),
        })
}
