//! HTTP client for the signal API

use anyhow::{Context, Result};

use crate::config::SIGNALS_PATH;
use crate::data::Signal;

pub struct SignalsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SignalsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the current signal list. The endpoint takes no parameters and
    /// returns a JSON array of signal objects.
    pub async fn get_signals(&self) -> Result<Vec<Signal>> {
        let url = format!("{}{}", self.base_url, SIGNALS_PATH);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .context("signal API returned an error status")?;

        let signals = response
            .json::<Vec<Signal>>()
            .await
            .context("malformed signal payload")?;

        Ok(signals)
    }
}
