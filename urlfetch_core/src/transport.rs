// HTTP transport abstraction - keeps the fetcher testable without a network

use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

/// Abstract transport that can issue a bare GET and return the body as text.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET with no custom headers or body and decode the response as text.
    /// Non-success HTTP status codes are reported as transport failures.
    async fn get_text(&self, url: &Url) -> FetchResult<String>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn get_text(&self, url: &Url) -> FetchResult<String> {
        (**self).get_text(url).await
    }
}

/// Production transport backed by reqwest.
///
/// The inner `Client` holds the connection pool shared by every request issued
/// through the same fetcher; it is cheaply cloneable and safe to use from
/// concurrent tasks without extra synchronization.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &Url) -> FetchResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("HTTP request failed: {}", e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Transport(format!("HTTP request failed: {}", e)))?;

        // Consuming the response here releases it on every exit path
        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response body: {}", e)))
    }
}
