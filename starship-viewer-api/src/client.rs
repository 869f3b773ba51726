//! HTTP client for the starships endpoint

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::types::{Starship, StarshipPage};

/// Production API base.
pub const SWAPI_BASE: &str = "https://swapi.dev/api";

/// Client for the starships collection.
///
/// Holds one [`reqwest::Client`] and a base URL fixed at construction.
/// Every fetch is an independent, idempotent request: no caching, no
/// retries, and no timeout configuration beyond the transport's defaults.
pub struct StarshipClient {
    client: Client,
    base_url: String,
}

impl StarshipClient {
    /// Creates a client against the given API base, e.g. `https://swapi.dev/api`.
    ///
    /// A trailing slash on the base is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// The API base this client was constructed with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the first page of the starships collection.
    ///
    /// Performs exactly one `GET {base}/starships` and resolves once with
    /// either the decoded record list or an [`ApiError`]:
    ///
    /// - transport failure → [`ApiError::Network`] with the underlying
    ///   description passed through verbatim;
    /// - empty response body → [`ApiError::EmptyBody`];
    /// - body not matching the expected shape → [`ApiError::Decode`].
    ///
    /// The HTTP status is logged but not inspected; a non-2xx body that does
    /// not decode surfaces as a decode error.
    pub async fn fetch_starships(&self) -> Result<Vec<Starship>> {
        let url = format!("{}/starships", self.base_url);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        if response_text.is_empty() {
            log::warn!("Response carried no body (status {status})");
            return Err(ApiError::EmptyBody);
        }

        let page: StarshipPage = serde_json::from_str(&response_text).map_err(|e| {
            log::error!("JSON decode failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(&response_text));
            ApiError::Decode {
                detail: e.to_string(),
            }
        })?;

        log::debug!("Decoded {} starship(s)", page.results.len());
        Ok(page.results)
    }
}

impl Default for StarshipClient {
    fn default() -> Self {
        Self::new(SWAPI_BASE)
    }
}

/// Limit for logged response bodies.
const LOG_BODY_LIMIT: usize = 512;

fn truncate_for_log(text: &str) -> String {
    if text.len() <= LOG_BODY_LIMIT {
        return text.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &text[..end], text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_production_base() {
        let client = StarshipClient::default();
        assert_eq!(client.base_url(), SWAPI_BASE);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StarshipClient::new("http://127.0.0.1:9999/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_for_log("{}"), "{}");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2000);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"x".repeat(LOG_BODY_LIMIT)));
        assert!(out.ends_with("(2000 bytes total)"));
    }
}
