//! GraphQL API client for the Shopify Admin API.
//!
//! - [`GraphqlClient`]: executes documents with JSON variables
//! - [`GraphqlError`]: error type for GraphQL API operations
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (still HTTP 200)
//! - `extensions`: Query cost information

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
