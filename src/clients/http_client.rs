//! HTTP client for upstream API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated,
//! time-bounded requests to the Shopify Admin API.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpRequest, JSON_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::config::AccessToken;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for making requests to the upstream API.
///
/// The client handles:
/// - URL construction from a base URI and base path
/// - Default headers including User-Agent and access token
/// - A total request timeout covering connect, send, and body read
///
/// Requests are attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; the inner `reqwest::Client` pools
/// connections across all requests.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use sku_lookup::AccessToken;
/// use sku_lookup::clients::HttpClient;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// let client = HttpClient::new(
///     "https://my-store.myshopify.com",
///     "/admin/api/2024-10",
///     Some(&token),
///     Duration::from_secs(10),
/// )
/// .unwrap();
///
/// assert_eq!(
///     client.url_for("graphql.json"),
///     "https://my-store.myshopify.com/admin/api/2024-10/graphql.json"
/// );
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., `/admin/api/2024-10`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_uri` - Scheme and authority, without trailing slash
    /// * `base_path` - Path prefix for every request (e.g., `/admin/api/2024-10`)
    /// * `access_token` - Sent as `X-Shopify-Access-Token` when present
    /// * `timeout` - Total time allowed per request
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(
        base_uri: impl Into<String>,
        base_path: impl Into<String>,
        access_token: Option<&AccessToken>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let base_uri = base_uri.into().trim_end_matches('/').to_string();
        let base_path = base_path.into().trim_end_matches('/').to_string();

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "User-Agent".to_string(),
            format!("sku-lookup/{SDK_VERSION}"),
        );
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        if let Some(token) = access_token {
            default_headers.insert(ACCESS_TOKEN_HEADER.to_string(), token.as_ref().to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request upstream.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The connection fails, times out, or the body cannot be read (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(&request.path);

        let mut req_builder = self
            .client
            .post(&url)
            .body(request.json_body.to_string());
        for (name, value) in &self.default_headers {
            req_builder = req_builder.header(name, value);
        }

        tracing::debug!(%url, "sending upstream request");

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        tracing::debug!(status = code, %url, "received upstream response");

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            body: response.body,
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
