//! Error taxonomy for variant lookups.
//!
//! The set is closed: every failure a lookup can produce is one of these
//! variants, and the HTTP layer maps each to exactly one status code.
//! A lookup that matches nothing is not an error; it is
//! [`VariantResult::NotFound`](crate::lookup::VariantResult::NotFound).

use std::time::Duration;

use thiserror::Error;

use crate::clients::{GraphqlError, HttpError};

/// Errors that can occur while looking up a variant by SKU.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The SKU was missing, empty, or only whitespace.
    #[error("sku is required")]
    InvalidSku,

    /// Upstream could not be reached (connect, DNS, TLS, timeout), or the
    /// lookup could not be attempted because the store is not configured.
    #[error("Error contacting Shopify: {message}")]
    UpstreamContact {
        /// Human-readable cause.
        message: String,
    },

    /// Upstream answered with a status other than 200.
    #[error("Shopify error {status}: {body}")]
    UpstreamProtocol {
        /// The upstream HTTP status.
        status: u16,
        /// The raw upstream body.
        body: String,
    },

    /// Upstream answered 200 but the body did not have the expected shape.
    #[error("Malformed Shopify response: {reason}")]
    MalformedResponse {
        /// What was wrong with the body.
        reason: String,
    },
}

impl LookupError {
    /// Classifies a GraphQL client failure.
    ///
    /// `timeout` is only used to word the message when the request timed out.
    #[must_use]
    pub fn from_graphql(error: GraphqlError, timeout: Duration) -> Self {
        let GraphqlError::Http(error) = error;
        match error {
            HttpError::Response(response) => Self::UpstreamProtocol {
                status: response.code,
                body: response.body,
            },
            HttpError::Network(ref e) if e.is_timeout() => Self::UpstreamContact {
                message: format!("request timed out after {}s", timeout.as_secs_f64()),
            },
            HttpError::Network(e) => Self::UpstreamContact {
                message: e.to_string(),
            },
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}
