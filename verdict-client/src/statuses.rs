//! Homework status API

use crate::error::{ClientError, Result};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

/// HTTP client for the homework status API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the status endpoint
    /// * `token` - OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the status endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Issues exactly one request. The decoded body is returned as raw JSON;
    /// its shape is checked by the caller.
    ///
    /// # Errors
    /// * [`ClientError::Connection`] - the server could not be reached
    /// * [`ClientError::HttpStatus`] - any status other than 200
    /// * [`ClientError::Decode`] - the body is not JSON
    /// * [`ClientError::ServerReported`] - the body carries `code` or `error`
    pub async fn fetch_status(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| ClientError::connection(&self.endpoint, e))?;

        let payload: Value = crate::handle_response(&self.endpoint, response).await?;

        reject_server_error(payload)
    }
}

/// Rejects 200 bodies that still describe a failure
///
/// The status API signals some failures (bad token, malformed `from_date`)
/// with a top-level `code` or `error` key instead of an HTTP status.
pub(crate) fn reject_server_error(payload: Value) -> Result<Value> {
    let Some(object) = payload.as_object() else {
        return Ok(payload);
    };

    if !object.contains_key("code") && !object.contains_key("error") {
        return Ok(payload);
    }

    let message = ["message", "error", "code"]
        .iter()
        .filter_map(|key| object.get(*key))
        .map(|value| match value {
            Value::String(text) => text.clone(),
            Value::Object(inner) => inner
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            other => other.to_string(),
        })
        .next()
        .unwrap_or_default();

    Err(ClientError::ServerReported { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("http://localhost:8080/statuses/", "token");
        assert_eq!(client.endpoint(), "http://localhost:8080/statuses/");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = PracticumClient::with_client("http://localhost:8080", "token", Client::new());
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn test_regular_payload_passes_through() {
        let payload = json!({ "homeworks": [], "current_date": 1 });
        assert_eq!(reject_server_error(payload.clone()).unwrap(), payload);

        let payload = json!(["not", "an", "object"]);
        assert_eq!(reject_server_error(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn test_code_key_is_a_failure() {
        let payload = json!({
            "code": "not_authenticated",
            "message": "Учетные данные не были предоставлены.",
        });

        match reject_server_error(payload) {
            Err(ClientError::ServerReported { message }) => {
                assert_eq!(message, "Учетные данные не были предоставлены.");
            }
            other => panic!("expected ServerReported, got {:?}", other),
        }
    }

    #[test]
    fn test_error_key_is_a_failure() {
        let payload = json!({ "error": { "error": "Wrong from_date format" }, "code": "UnknownError" });

        match reject_server_error(payload) {
            Err(ClientError::ServerReported { message }) => {
                assert_eq!(message, "Wrong from_date format");
            }
            other => panic!("expected ServerReported, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_keeps_cause() {
        let client = PracticumClient::new("http://127.0.0.1:1/statuses/", "token");

        match client.fetch_status(0).await.unwrap_err() {
            ClientError::Connection { endpoint, cause } => {
                assert_eq!(endpoint, "http://127.0.0.1:1/statuses/");
                // top-level message plus at least one underlying cause
                assert!(cause.starts_with("error sending request"), "{}", cause);
                assert!(cause.contains(": "), "{}", cause);
            }
            other => panic!("expected Connection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_carries_token_and_cursor() {
        let (base, server) = serve_once("200 OK", "application/json", r#"{"homeworks": [], "current_date": 5}"#).await;
        let client = PracticumClient::new(format!("{}/statuses/", base), "secret-token");

        let payload = client.fetch_status(1_700_000_000).await.unwrap();
        assert_eq!(payload, json!({ "homeworks": [], "current_date": 5 }));

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /statuses/?from_date=1700000000 HTTP/1.1\r\n"),
            "{}",
            request
        );
        assert!(
            request.to_lowercase().contains("authorization: oauth secret-token\r\n"),
            "{}",
            request
        );
    }

    #[tokio::test]
    async fn test_non_200_is_http_status_error() {
        let (base, server) = serve_once("503 Service Unavailable", "application/json", r#"{"homeworks": []}"#).await;
        let client = PracticumClient::new(format!("{}/statuses/", base), "token");

        let err = client.fetch_status(0).await.unwrap_err();
        assert!(matches!(err, ClientError::HttpStatus { status: 503, .. }), "{:?}", err);
        assert!(err.is_server_error());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let (base, server) = serve_once("200 OK", "text/html", "<html>maintenance</html>").await;
        let client = PracticumClient::new(format!("{}/statuses/", base), "token");

        match client.fetch_status(0).await.unwrap_err() {
            ClientError::Decode(cause) => {
                assert!(cause.starts_with("error decoding response body"), "{}", cause);
                // serde_json's reason survives
                assert!(cause.contains("expected value"), "{}", cause);
            }
            other => panic!("expected Decode, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_code_in_200_body_is_server_reported() {
        let (base, server) = serve_once(
            "200 OK",
            "application/json",
            r#"{"code": "not_authenticated", "message": "Учетные данные не были предоставлены."}"#,
        )
        .await;
        let client = PracticumClient::new(format!("{}/statuses/", base), "token");

        match client.fetch_status(0).await.unwrap_err() {
            ClientError::ServerReported { message } => {
                assert_eq!(message, "Учетные данные не были предоставлены.");
            }
            other => panic!("expected ServerReported, got {:?}", other),
        }
        server.await.unwrap();
    }
}
