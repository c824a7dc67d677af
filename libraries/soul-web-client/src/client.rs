//! Main web API client.

use crate::auth::{StaticToken, TokenSource};
use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{Result, WebClientError};
use crate::library::LibraryClient;
use crate::types::{ApiErrorBody, IdsRequest};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the music service web API.
///
/// Holds the HTTP transport, the normalized base URL and the credential
/// source. It is cheap to share behind an `Arc`; each call issues its own
/// request.
///
/// # Example
///
/// ```ignore
/// use soul_web_client::{ClientConfig, RequestContext, WebApiClient};
///
/// let config = ClientConfig::with_token("https://api.spotify.com/v1", token);
/// let client = WebApiClient::new(config)?;
///
/// let ctx = RequestContext::background();
/// let saved = client
///     .library()
///     .user_has_tracks(&ctx, &["0udZHhCi7p1YzMlvI4fXoK", "55nlbqqFVnSsArIeYSQlqx"])
///     .await?;
/// println!("{:?}", saved.as_slice());
/// ```
pub struct WebApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn TokenSource>,
}

impl WebApiClient {
    /// Create a client authenticated with the config's static access token.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let token = config.access_token.clone().ok_or_else(|| {
            WebClientError::Credentials("no access token configured".into())
        })?;
        Self::with_token_source(config, Arc::new(StaticToken::new(token)))
    }

    /// Create a client that asks `credentials` for a token on every request.
    pub fn with_token_source(
        config: ClientConfig,
        credentials: Arc<dyn TokenSource>,
    ) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Self::with_http_client(config, http, credentials)
    }

    /// Create a client on top of a caller-supplied transport.
    pub fn with_http_client(
        config: ClientConfig,
        http: Client,
        credentials: Arc<dyn TokenSource>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a library client for saved tracks and albums.
    pub fn library(&self) -> LibraryClient<'_> {
        LibraryClient::new(self)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path);

        ctx.run(async {
            let token = self.credentials.token().await?;
            debug!(url = %url, "GET");

            let response = self
                .http
                .get(&url)
                .bearer_auth(token)
                .query(query)
                .send()
                .await?;
            let response = check_status(Method::GET, &url, response).await?;

            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                WebClientError::Decode(format!("Failed to parse response from {}: {}", url, e))
            })
        })
        .await
    }

    /// Send `{"ids": [...]}` to `path`, expecting an empty 2xx response.
    pub(crate) async fn send_ids(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        ids: &[&str],
    ) -> Result<()> {
        let url = self.endpoint(path);

        ctx.run(async {
            let token = self.credentials.token().await?;
            debug!(method = %method, url = %url, ids = ids.len(), "Sending IDs");

            let response = self
                .http
                .request(method.clone(), &url)
                .bearer_auth(token)
                .json(&IdsRequest { ids })
                .send()
                .await?;
            check_status(method, &url, response).await?;

            Ok(())
        })
        .await
    }
}

/// Pass 2xx responses through, turn anything else into an API error.
async fn check_status(method: Method, url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            debug!(url = %url, status = status.as_u16(), error = %e, "Failed to read error body");
            String::new()
        }
    };
    let error = api_error(status, &text);
    warn!(method = %method, url = %url, status = status.as_u16(), error = %error, "API request failed");
    Err(error)
}

/// Build an API error from a non-2xx body.
///
/// The status always comes from the response line; the body only supplies
/// the message. Falls back to the raw body, then the canonical reason, when
/// the body is not the documented error object.
fn api_error(status: reqwest::StatusCode, body: &str) -> WebClientError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(decoded) => {
            if decoded.error.status != status.as_u16() {
                debug!(
                    http_status = status.as_u16(),
                    body_status = decoded.error.status,
                    "Error body status differs from response status"
                );
            }
            WebClientError::Api {
                status: status.as_u16(),
                message: decoded.error.message,
            }
        }
        Err(_) => {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body.trim().to_string()
            };
            WebClientError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(WebApiClient::new(ClientConfig::with_token("https://example.com", "t")).is_ok());
        assert!(WebApiClient::new(ClientConfig::with_token("http://localhost:8080", "t")).is_ok());

        // Invalid URLs
        assert!(WebApiClient::new(ClientConfig::with_token("", "t")).is_err());
        assert!(WebApiClient::new(ClientConfig::with_token("not-a-url", "t")).is_err());
        assert!(WebApiClient::new(ClientConfig::with_token("ftp://example.com", "t")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = WebApiClient::new(ClientConfig::with_token("https://example.com/v1//", "t"))
            .expect("valid url");

        // URL should have trailing slashes removed
        assert_eq!(client.base_url(), "https://example.com/v1");
        assert_eq!(client.endpoint("me/tracks"), "https://example.com/v1/me/tracks");
    }

    #[test]
    fn test_missing_token_rejected() {
        let result = WebApiClient::new(ClientConfig::new("https://example.com"));
        assert!(matches!(result, Err(WebClientError::Credentials(_))));
    }

    #[test]
    fn test_api_error_decodes_documented_shape() {
        let err = api_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"status": 401, "message": "Invalid access token"}}"#,
        );
        match err {
            WebClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid access token");
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }
    }

    #[test]
    fn test_api_error_status_comes_from_response() {
        let err = api_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"status": 400, "message": "Bad request"}}"#,
        );
        match err {
            WebClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Bad request");
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_text() {
        match api_error(StatusCode::BAD_GATEWAY, "upstream down\n") {
            WebClientError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }

        match api_error(StatusCode::FORBIDDEN, "") {
            WebClientError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }
    }
}
