//! HTTP client types for upstream Shopify API communication.
//!
//! - [`HttpClient`]: async, time-bounded HTTP client
//! - [`HttpRequest`]: a request to be sent upstream
//! - [`HttpResponse`]: a response with its raw body
//! - [`graphql::GraphqlClient`]: Admin API GraphQL client
//!
//! # Failure Behavior
//!
//! Requests are attempted once. Transport failures surface as
//! [`HttpError::Network`]; non-2xx responses as [`HttpError::Response`]
//! carrying the status and the raw body.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpRequest, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
