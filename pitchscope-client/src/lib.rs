//! Pitchscope HTTP Client
//!
//! A simple, type-safe HTTP client for the startup idea evaluation API.
//!
//! This crate provides the submission and status endpoints as typed methods,
//! plus the [`JobPoller`] that turns a submitted job into exactly one
//! terminal outcome by polling on a fixed cadence under a deadline.
//!
//! # Example
//!
//! ```no_run
//! use pitchscope_client::EvaluatorClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EvaluatorClient::new("http://localhost:8000");
//!
//!     let result = client
//!         .evaluate("A marketplace for renting cameras peer-to-peer", |update| {
//!             println!("{update}");
//!         })
//!         .await?;
//!
//!     println!("Final score: {}/100", result.final_score);
//!     Ok(())
//! }
//! ```

pub mod error;
mod evaluate;
pub mod poller;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{JobPoller, PollUpdate, StatusSource};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the evaluation API
///
/// This client provides methods for the consumed API surface:
/// - Idea submission (`POST /evaluate/async`)
/// - Job status queries (`GET /evaluate/status/{id}`)
/// - Best-effort job cleanup (`DELETE /jobs/{id}`)
/// - Health probing (`GET /health`)
#[derive(Debug, Clone)]
pub struct EvaluatorClient {
    /// Base URL of the evaluation service (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl EvaluatorClient {
    /// Create a new evaluator client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the evaluation API (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use pitchscope_client::EvaluatorClient;
    ///
    /// let client = EvaluatorClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new evaluator client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the evaluation API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use pitchscope_client::EvaluatorClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = EvaluatorClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the evaluation service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EvaluatorClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = EvaluatorClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = EvaluatorClient::with_client("http://localhost:8000", http_client);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
