//! Variant lookup by SKU.
//!
//! This module is the core of the proxy: it turns a SKU into a single
//! Admin GraphQL call and reshapes the first matching variant.
//!
//! - [`SkuLookupService`]: performs lookups
//! - [`Sku`]: validated lookup key and its search filter
//! - [`VariantResult`] / [`VariantSummary`]: normalized outcome
//! - [`LookupError`]: closed error taxonomy
//!
//! # Flow
//!
//! 1. Validate the SKU (no network call on failure)
//! 2. POST [`query::VARIANT_BY_SKU_QUERY`] with `{"query": "sku:<value>"}` as variables
//! 3. Non-200 → [`LookupError::UpstreamProtocol`]
//! 4. Navigate `data.productVariants.edges`; empty or absent → [`VariantResult::NotFound`]
//! 5. Reshape the first edge's node into [`VariantSummary`]

mod errors;
pub mod query;
mod result;
mod service;
mod sku;

pub use errors::LookupError;
pub use result::{VariantResult, VariantSummary};
pub use service::SkuLookupService;
pub use sku::Sku;
