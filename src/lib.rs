//! # SKU Lookup
//!
//! A small HTTP proxy that resolves a SKU to the title and price of the
//! first matching Shopify product variant, for a browser-based price
//! checker.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`LookupConfig`] and [`LookupConfigBuilder`]
//! - Validated newtypes for the store domain, access token and API version
//! - A time-bounded Admin GraphQL client in [`clients`]
//! - The lookup operation itself in [`lookup`]
//! - An axum router exposing `GET /api/variant_by_sku` in [`server`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sku_lookup::{AccessToken, LookupConfig, ShopDomain, SkuLookupService, VariantResult};
//!
//! let config = LookupConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_...").unwrap())
//!     .build()?;
//!
//! let service = SkuLookupService::new(&config)?;
//! match service.lookup("9780307474728").await? {
//!     VariantResult::Found(v) => println!("{} costs {}", v.title, v.price),
//!     VariantResult::NotFound => println!("no such SKU"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is loaded once and passed explicitly
//! - **Fail-fast validation**: invalid settings stop startup; absent ones only warn
//! - **Parameterized queries**: the SKU travels as a GraphQL variable
//! - **Closed error set**: every failure maps to one [`LookupError`] variant

pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod server;

pub use config::{
    AccessToken, ApiVersion, HostUrl, LookupConfig, LookupConfigBuilder, ShopDomain,
};
pub use error::ConfigError;
pub use lookup::{LookupError, Sku, SkuLookupService, VariantResult, VariantSummary};
