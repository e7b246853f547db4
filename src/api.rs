//! Thin client for the DigitalOcean control-plane API.
//!
//! Every call is a GET with the credentials serialized into the query
//! string alongside the call-specific parameters. The client does not
//! retry, does not time out, and does not interpret status codes; callers
//! treat 200 as success and anything else as a failure to report.

use anyhow::Result;
use reqwest::Client;
use std::env;

use crate::config::Credentials;
use crate::constants::{API_BASE_ENV, API_BASE_URL};

/// Raw status/body pair from a single API call. Consumed immediately by
/// the requesting command; never retained.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

pub struct ApiClient {
    base_url: String,
    credentials: Credentials,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(ApiClient {
            base_url: base_url.into(),
            credentials,
            client,
        })
    }

    /// Build a client against the production entry point, or the
    /// `OCEANCTL_API_BASE` override when set.
    pub fn from_env(credentials: Credentials) -> Result<Self> {
        let base = env::var(API_BASE_ENV).unwrap_or_else(|_| API_BASE_URL.to_string());
        Self::new(base, credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET to `base_url + path`. The query string always carries
    /// `client_id` and `api_key` first, then `params` in order.
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut query: Vec<(&str, &str)> = vec![
            ("client_id", self.credentials.client_id.as_str()),
            ("api_key", self.credentials.api_key.as_str()),
        ];
        query.extend_from_slice(params);

        tracing::debug!("GET {url}");
        let resp = self.client.get(&url).query(&query).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        tracing::debug!("{url} -> {status} ({} bytes)", body.len());

        Ok(ApiResponse { status, body })
    }
}
