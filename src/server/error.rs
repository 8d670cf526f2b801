//! HTTP error mapping for lookup failures.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::lookup::LookupError;

/// A request failure on its way to the HTTP caller.
///
/// Rendered as `{"detail": "<message>"}` with the status from
/// [`ApiError::status`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The lookup itself failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The query string could not be decoded (e.g. a repeated `sku`).
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    ///
    /// | Error | Status |
    /// |---|---|
    /// | `InvalidQuery` | 400 |
    /// | `InvalidSku` | 400 |
    /// | `UpstreamContact` | 500 |
    /// | `UpstreamProtocol` | 502 |
    /// | `MalformedResponse` | 502 |
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuery(_) | Self::Lookup(LookupError::InvalidSku) => {
                StatusCode::BAD_REQUEST
            }
            Self::Lookup(LookupError::UpstreamContact { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Lookup(
                LookupError::UpstreamProtocol { .. } | LookupError::MalformedResponse { .. },
            ) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), %detail, "variant lookup failed");
        } else {
            tracing::debug!(status = status.as_u16(), %detail, "variant lookup rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
