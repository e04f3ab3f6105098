//! Small blocking HTTP helpers with a hard timeout.

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

fn get(url: &str, timeout: Duration) -> Result<reqwest::blocking::Response> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?;

    if !response.status().is_success() {
        return Err(anyhow!("{} returned status {}", url, response.status()));
    }

    Ok(response)
}

/// Response body, trimmed
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let body = get(url, timeout)?
        .text()
        .with_context(|| format!("Failed to read response from {}", url))?;
    Ok(body.trim().to_string())
}

pub fn fetch_json<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T> {
    get(url, timeout)?
        .json()
        .with_context(|| format!("Failed to parse JSON from {}", url))
}

/// Fractional seconds from configuration, negative values clamped to zero
pub fn timeout_from_secs(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}
