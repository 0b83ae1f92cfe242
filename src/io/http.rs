use crate::io::{FetchError, TemplateFetcher};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

pub struct HttpTemplateFetcher {
    client: Client,
    base_url: Url,
}

impl HttpTemplateFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment of a base without a trailing slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("Invalid template base url '{}'", normalized))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build http client for template fetching")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl TemplateFetcher for HttpTemplateFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let transport = |message: String| FetchError::Transport {
            address: address.to_string(),
            message,
        };

        let url = self
            .base_url
            .join(address)
            .map_err(|e| transport(e.to_string()))?;

        debug!(%url, "fetching template");

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                address: address.to_string(),
            });
        }

        response.text().await.map_err(|e| transport(e.to_string()))
    }
}
