//! HTTP transport seam.
//!
//! ARCHITECTURE
//! ============
//! [`ApiClient`](super::api::ApiClient) builds an [`HttpRequest`] and hands it
//! to a [`Transport`]; status handling and JSON parsing stay in the client so
//! every backend behaves identically. The browser uses `gloo-net`, native
//! tools use `reqwest`, tests use a recording mock.
//!
//! The trait is `?Send` because browser fetch futures are not `Send`.

#[cfg(feature = "native")]
use crate::config::HttpTimeouts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// `text/plain` keeps a cross-origin POST/PUT a CORS "simple request"
/// (no preflight); the body is still a JSON document.
pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), bearer: None, content_type: None, body: None }
    }

    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    #[must_use]
    pub fn body(mut self, content_type: &'static str, body: String) -> Self {
        self.content_type = Some(content_type);
        self.body = Some(body);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not produce a response.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends HTTP requests. Implementations return any received response, success
/// or not; only failures to get a response are errors.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send `request` and read the full response body as text.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// =============================================================================
// NATIVE (reqwest)
// =============================================================================

#[cfg(feature = "native")]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| TransportError(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http })
    }
}

#[cfg(feature = "native")]
#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };
        let mut builder = self.http.request(method, &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(content_type) = request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

// =============================================================================
// BROWSER (gloo-net)
// =============================================================================

#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(content_type) = request.content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let response = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
