//! HTTP client wrapper for File Browser API requests.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for making requests to a File Browser server.
///
/// Every request carries a timeout; expiry surfaces as a network error,
/// equivalent to a non-2xx failure at that protocol step.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with the default per-request timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Start building a request; the per-request timeout is already applied.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url).timeout(self.timeout)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain a failed response into (status, server message) for error reporting.
///
/// File Browser error bodies are plain text or `{"message": ...}` JSON.
pub(crate) async fn status_and_message(response: Response) -> (u16, String) {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(body) if !body.trim().is_empty() => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body),
        _ => "unknown error".to_string(),
    };
    (status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = HttpClient::new();
        let _default = HttpClient::default();
    }

    #[test]
    fn test_custom_timeout() {
        let client = HttpClient::with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }
}
