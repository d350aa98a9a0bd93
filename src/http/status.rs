//! Non-success HTTP responses.

use reqwest::StatusCode;

/// A response that did not complete with a success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatusError {
    status: StatusCode,
    url: String,
}

impl HttpStatusError {
    pub fn new(status: StatusCode, url: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {} from {}", self.status.as_u16(), self.url)
    }
}

impl std::error::Error for HttpStatusError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_status_and_url() {
        let err = HttpStatusError::new(StatusCode::NOT_FOUND, "http://x/data/repos.json");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.url(), "http://x/data/repos.json");
        assert_eq!(err.to_string(), "HTTP 404 from http://x/data/repos.json");
    }

    #[test]
    fn test_status_error_display_server_error() {
        let err = HttpStatusError::new(StatusCode::SERVICE_UNAVAILABLE, "u");
        assert_eq!(err.to_string(), "HTTP 503 from u");
    }
}
