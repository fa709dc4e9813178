//! Homework status API endpoint

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request, StatusCode};
use serde_json::Value;
use tracing::info;
use verdict_core::Secret;
use verdict_core::domain::Cursor;

use crate::error::{ClientError, Result};
use crate::status_error;

/// Client for the homework status API
///
/// Every call is a single GET carrying the cursor as `from_date` and an
/// `OAuth` authorization header. The body is returned untyped; shape
/// checks belong to `verdict_core::dto::validate`.
#[derive(Debug, Clone)]
pub struct StatusClient {
    endpoint: String,
    token: Secret,
    client: Client,
}

impl StatusClient {
    /// Create a status client with a default HTTP client
    pub fn new(endpoint: impl Into<String>, token: Secret) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a status client with a configured reqwest Client
    ///
    /// Use this to bound requests with a timeout (see [`crate::http_client`]).
    pub fn with_client(endpoint: impl Into<String>, token: Secret, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token,
            client,
        }
    }

    /// Get the status endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses updated since `cursor`
    ///
    /// # Errors
    /// * [`ClientError::RequestFailed`] on transport failure or timeout
    /// * [`ClientError::ApiStatus`] if the API answers anything but 200
    /// * [`ClientError::ParseError`] if a 200 body is not JSON
    pub async fn fetch(&self, cursor: Cursor) -> Result<Value> {
        info!(
            "Requesting homework statuses: url={}, from_date={}",
            self.endpoint, cursor
        );

        let request = self.request(cursor)?;
        let response = self.client.execute(request).await?;

        if response.status() != StatusCode::OK {
            return Err(status_error(response).await);
        }

        let body = response.json::<Value>().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse JSON response: {}", e))
        })?;

        info!("Status API request succeeded");
        Ok(body)
    }

    fn request(&self, cursor: Cursor) -> Result<Request> {
        self.client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token.expose()))
            .query(&[("from_date", cursor.as_secs())])
            .build()
            .map_err(ClientError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ERROR_BODY_CHARS;
    use crate::test_server::respond_once;
    use verdict_core::domain::notification::{MAX_MESSAGE_CHARS, failure_message};

    const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

    #[test]
    fn test_request_carries_cursor_and_token() {
        let client = StatusClient::new(ENDPOINT, Secret::new("practicum-token"));
        let request = client.request(Cursor::new(1_700_000_000)).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().query(), Some("from_date=1700000000"));
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "OAuth practicum-token"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let client = StatusClient::new(ENDPOINT, Secret::new("practicum-token"));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("practicum-token"));
        assert_eq!(client.endpoint(), ENDPOINT);
    }

    #[tokio::test]
    async fn test_fetch_returns_json_body() {
        let base = respond_once(
            "200 OK",
            "application/json",
            r#"{"homeworks": [], "current_date": 1700000000}"#,
        )
        .await;
        let client = StatusClient::new(format!("{}/statuses/", base), Secret::new("token"));

        let body = client.fetch(Cursor::new(0)).await.unwrap();
        assert_eq!(body["current_date"], 1_700_000_000);
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_200_success() {
        let base = respond_once("204 No Content", "text/plain", "").await;
        let client = StatusClient::new(base, Secret::new("token"));

        match client.fetch(Cursor::new(0)).await {
            Err(ClientError::ApiStatus {
                status,
                reason,
                body,
            }) => {
                assert_eq!(status, 204);
                assert_eq!(reason, "No Content");
                assert_eq!(body, "");
            }
            other => panic!("expected ApiStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_json_body() {
        let base = respond_once("200 OK", "text/html", "<html>maintenance</html>").await;
        let client = StatusClient::new(base, Secret::new("token"));

        assert!(matches!(
            client.fetch(Cursor::new(0)).await,
            Err(ClientError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_large_error_page_is_truncated() {
        let page = "x".repeat(10_000);
        let base = respond_once("500 Internal Server Error", "text/html", page).await;
        let client = StatusClient::new(base, Secret::new("token"));

        let err = client.fetch(Cursor::new(0)).await.unwrap_err();
        match &err {
            ClientError::ApiStatus { status, body, .. } => {
                assert_eq!(*status, 500);
                assert_eq!(body.chars().count(), MAX_ERROR_BODY_CHARS);
                assert!(body.ends_with('…'));
            }
            other => panic!("expected ApiStatus, got {:?}", other),
        }

        let message = failure_message(&err);
        assert!(message.chars().count() <= MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_invalid_endpoint_fails_to_build() {
        let client = StatusClient::new("not a url", Secret::new("practicum-token"));
        assert!(matches!(
            client.request(Cursor::default()),
            Err(ClientError::RequestFailed(_))
        ));
    }
}
