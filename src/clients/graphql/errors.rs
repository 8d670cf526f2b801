//! GraphQL-specific error types.
//!
//! Only transport and HTTP-level failures are errors here. GraphQL-level
//! errors arrive with HTTP 200 in the body's `errors` field and are left to
//! the caller to interpret.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use sku_lookup::clients::graphql::GraphqlError;
/// use sku_lookup::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     body: r#"{"errors":"[API] Invalid API key or access token"}"#.to_string(),
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Invalid API key"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
