//! Thin HTTP client used by the data sources.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::status::HttpStatusError;

/// HTTP client performing single-shot JSON reads.
///
/// Requests are never retried: a failed read surfaces immediately to the
/// caller, which decides how to present it.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// A non-success status is reported as [`HttpStatusError`] inside the
    /// returned `anyhow::Error`.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", url, status);
            return Err(HttpStatusError::new(status, url).into());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        serde_json::from_str(&body).context("Failed to parse JSON response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct TestResponse {
            name: String,
            value: i32,
        }

        let result: TestResponse = client.get_json(&format!("{}/test", url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_get_json_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());

        let result: Result<serde_json::Value> = client.get_json(&format!("{}/test", url)).await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        let status = err.downcast_ref::<HttpStatusError>().unwrap();
        assert_eq!(status.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_json_server_error_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value> = client.get_json(&format!("{}/test", url)).await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        let status = err.downcast_ref::<HttpStatusError>().unwrap();
        assert_eq!(status.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let result: Result<Vec<String>> = client.get_json(&format!("{}/test", url)).await;

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<HttpStatusError>().is_none());
        assert!(err.to_string().contains("Failed to parse JSON response"));
    }

    #[tokio::test]
    async fn test_get_json_connection_refused() {
        // Nothing listens on port 1.
        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value> = client.get_json("http://127.0.0.1:1/test").await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to send request"));
    }
}
