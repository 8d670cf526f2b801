//! HTTP-specific error types for upstream calls.
//!
//! - [`HttpResponseError`]: upstream answered with a non-2xx status
//! - [`HttpError`]: a non-2xx response or a transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use sku_lookup::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Upstream error {}: {}", e.code, e.body),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when upstream answers with a non-successful status.
///
/// The raw response body is kept verbatim so it can be echoed back to the
/// caller for diagnostics.
///
/// # Example
///
/// ```rust
/// use sku_lookup::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     body: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
/// };
///
/// assert!(error.to_string().starts_with("Upstream responded with 401"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Upstream responded with {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Errors from a single upstream request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Connection, DNS, TLS, timeout, or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
