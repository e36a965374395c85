// HTTP dataset loader.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use opsboard_core::{DatasetLoader, LoadError, PlayerRecord};

use super::payload::parse_payload;

/// Fetches the csv2json payload with a GET request. No retries.
pub struct HttpLoader {
    http: reqwest::Client,
    url: String,
}

impl HttpLoader {
    /// Build a loader for `url`. `timeout` of `None` leaves the request
    /// unbounded.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, url))
    }

    /// Use a pre-built client (custom proxy or TLS settings).
    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        HttpLoader {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DatasetLoader for HttpLoader {
    async fn load(&self) -> Result<Vec<PlayerRecord>, LoadError> {
        debug!(url = %self.url, "requesting dataset");

        let response = self.http.get(&self.url).send().await.map_err(|e| {
            warn!(?e, "dataset request failed");
            LoadError::fetch(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "dataset request returned error status");
            return Err(LoadError::fetch(format!("HTTP error! status: {}", status.as_u16())));
        }

        let body = response.text().await.map_err(|e| {
            warn!(?e, "failed to read dataset body");
            LoadError::fetch(e.to_string())
        })?;

        let records = parse_payload(&body)?;
        info!("Loaded {} player rows from {}", records.len(), self.url);
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
