// Core client implementation

use crate::envelope;
use crate::resources::{ApplicationsClient, DnsClient};
use crate::types::*;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client as HttpClient, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.civo.com";
const USER_AGENT: &str = concat!("civo-rs/", env!("CARGO_PKG_VERSION"));

/// One fully-formed API request handed to a [`Transport`].
///
/// The credential travels with the request so a transport never reaches back
/// into client state.
#[derive(Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub token: String,
    pub body: Option<serde_json::Value>,
}

// Keep the bearer token out of debug output
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .field("body", &self.body)
            .finish()
    }
}

/// A single HTTP request/response exchange.
///
/// The production implementation is [`ReqwestTransport`]; tests substitute
/// recording stubs via [`Client::with_transport`]. Implementations must be
/// safe for concurrent use, the client is shared across calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one exchange and return the raw response body on HTTP success.
    ///
    /// Non-2xx responses are classified into [`CivoError::Api`]; network-level
    /// failures into [`CivoError::Transport`]. No retries at this layer.
    async fn execute(&self, request: ApiRequest) -> CivoResult<Bytes>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self { http_client }
    }

    /// Wrap a pre-configured `reqwest` client (custom timeout, proxy, TLS).
    pub fn with_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Map a non-2xx response into an API error, preferring the provider's
    /// structured `{code, reason, details}` body over the raw text.
    fn classify_failure(status: u16, body: &[u8]) -> CivoError {
        if let Ok(parsed) = serde_json::from_slice::<ApiErrorBody>(body) {
            if parsed.code.is_some() || parsed.reason.is_some() || parsed.details.is_some() {
                let reason = parsed
                    .reason
                    .or(parsed.details)
                    .unwrap_or_else(|| format!("HTTP status {}", status));
                return CivoError::api_error(status, parsed.code, reason);
            }
        }

        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        let reason = if text.is_empty() {
            format!("HTTP status {}", status)
        } else {
            sanitize_error_message(text)
        };
        CivoError::api_error(status, None, reason)
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> CivoResult<Bytes> {
        let mut builder = self
            .http_client
            .request(request.method.clone(), &request.url)
            .bearer_auth(&request.token);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        log::debug!("{} {} -> {}", request.method, request.url, status);

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(Self::classify_failure(status.as_u16(), &bytes))
        }
    }
}

/// Civo API client.
///
/// Holds the immutable per-session configuration: base URL, bearer token and
/// the transport. Cloning is cheap and clones share the transport, so one
/// client value can serve concurrent calls.
#[derive(Clone)]
pub struct Client {
    pub(crate) token: SecureToken,
    pub base_url: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new client with the specified API token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecureToken::new(token),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Substitute the HTTP execution mechanism.
    ///
    /// This is the seam used by tests to run accessors against a stub without
    /// touching the network.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// DNS domains and records
    pub fn dns(&self) -> DnsClient {
        DnsClient::new(self.clone())
    }

    /// Applications
    pub fn applications(&self) -> ApplicationsClient {
        ApplicationsClient::new(self.clone())
    }

    pub async fn send_get_request(&self, path: &str) -> CivoResult<Bytes> {
        self.send_request(Method::GET, path, None).await
    }

    pub async fn send_delete_request(&self, path: &str) -> CivoResult<Bytes> {
        self.send_request(Method::DELETE, path, None).await
    }

    pub async fn send_post_request<T: Serialize>(&self, path: &str, body: &T) -> CivoResult<Bytes> {
        self.send_request(Method::POST, path, Some(to_body(body)?)).await
    }

    pub async fn send_put_request<T: Serialize>(&self, path: &str, body: &T) -> CivoResult<Bytes> {
        self.send_request(Method::PUT, path, Some(to_body(body)?)).await
    }

    /// Decode the body of an action-style endpoint (typically delete)
    pub fn decode_simple_response(&self, body: &[u8]) -> CivoResult<SimpleResponse> {
        envelope::decode_item(body)
    }

    async fn send_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> CivoResult<Bytes> {
        // Configuration errors surface before any network call
        if self.token.is_empty() {
            return Err(CivoError::MissingToken);
        }

        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        self.transport
            .execute(ApiRequest {
                method,
                url,
                token: self.token.as_str().to_string(),
                body,
            })
            .await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

fn to_body<T: Serialize>(body: &T) -> CivoResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|e| CivoError::validation(format!("failed to serialize request body: {}", e)))
}
