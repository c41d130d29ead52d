use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::SyncConfig;
use crate::constants::REST_PREFIX;
use crate::error::{SyncError, SyncResult};
use crate::logging::{log_error, log_info, log_warn};
use crate::models::{Issue, StoredIssue};

use super::IssueStore;

/// Client for a PostgREST-style table holding uploaded issues.
pub struct StoreClient {
    client: reqwest::Client,
    endpoint: String,
}

impl StoreClient {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> SyncResult<Self> {
        let key = HeaderValue::from_str(api_key)
            .map_err(|_| SyncError::Config("API key contains invalid header characters".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| SyncError::Config("API key contains invalid header characters".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}/{}", base_url.trim_end_matches('/'), REST_PREFIX, table),
        })
    }

    pub fn from_config(config: &SyncConfig) -> SyncResult<Self> {
        Self::new(&config.store_url, &config.api_key, &config.table)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_category(&self, category: &str) -> SyncResult<Vec<StoredIssue>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("select", "*".to_string()), ("category", format!("eq.{}", category))])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Store(format!("Status {}: {}", status, body)));
        }

        let rows = response.json::<Vec<Value>>().await?;
        Ok(decode_rows(rows))
    }

    async fn post_issues(&self, issues: &[Issue]) -> SyncResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(issues)
            .send()
            .await
            .map_err(|e| SyncError::Upload(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SyncError::Upload(format!("Status {}: {}", status, body)))
    }

    async fn send_delete(&self, links: &[String]) -> SyncResult<()> {
        let response = self
            .client
            .delete(&self.endpoint)
            .query(&[("link", in_list_filter(links))])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Store(format!("Status {}: {}", status, body)));
        }

        Ok(())
    }
}

impl IssueStore for StoreClient {
    async fn list_by_category(&self, category: &str) -> Vec<StoredIssue> {
        match self.fetch_category(category).await {
            Ok(rows) => rows,
            Err(e) => {
                log_error(&format!("Failed to fetch existing issues for '{}': {}", category, e));
                Vec::new()
            }
        }
    }

    async fn insert_issues(&self, issues: &[Issue]) -> SyncResult<()> {
        log_info(&format!("Uploading {} issues", issues.len()));

        match self.post_issues(issues).await {
            Ok(()) => {
                log_info(&format!("Uploaded {} issues", issues.len()));
                Ok(())
            }
            Err(e) => {
                log_error(&format!("Upload of {} issues failed: {}", issues.len(), e));
                Err(e)
            }
        }
    }

    async fn delete_by_links(&self, links: &[String]) -> bool {
        match self.send_delete(links).await {
            Ok(()) => {
                log_info(&format!("Deleted {} stale issues", links.len()));
                true
            }
            Err(e) => {
                log_error(&format!("Failed to delete {} stale issues: {}", links.len(), e));
                false
            }
        }
    }
}

/// Decodes rows one at a time so a single malformed row (e.g. a null
/// `link`) is dropped instead of failing the whole fetch.
fn decode_rows(rows: Vec<Value>) -> Vec<StoredIssue> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<StoredIssue>(row.clone()) {
            Ok(stored) => Some(stored),
            Err(e) => {
                log_warn(&format!("Ignoring stored row without a usable link ({}): {}", e, row));
                None
            }
        })
        .collect()
}

/// Builds an `in.(...)` filter value. Every item is double-quoted since
/// links may contain commas or parentheses.
pub fn in_list_filter(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}
