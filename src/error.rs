//! Configuration error types for the SKU lookup proxy.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so that a
//! bad value is rejected at startup rather than on the first lookup.
//!
//! # Example
//!
//! ```rust
//! use sku_lookup::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the proxy configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Set SHOPIFY_API_TOKEN to an Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' with a quarterly month (e.g., '2024-10') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a URL with scheme (e.g., 'http://127.0.0.1:9000').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Listen address could not be parsed.
    #[error("Invalid listen address '{addr}'. Expected 'host:port' (e.g., '0.0.0.0:8000').")]
    InvalidBindAddr {
        /// The invalid address that was provided.
        addr: String,
    },

    /// Timeout is not a positive number of seconds.
    #[error("Invalid lookup timeout '{value}'. Expected a positive number of seconds.")]
    InvalidTimeout {
        /// The invalid value that was provided.
        value: String,
    },
}
