//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use sku_lookup::{AccessToken, HostUrl, LookupConfig, ShopDomain};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "shpat_test_token";
pub const GRAPHQL_PATH: &str = "/admin/api/2024-10/graphql.json";

/// Configuration pointing at a fake upstream.
pub fn config_for(server: &MockServer) -> LookupConfig {
    config_with_timeout(&server.uri(), Duration::from_secs(5))
}

/// Configuration pointing at `origin` with a specific timeout.
pub fn config_with_timeout(origin: &str, timeout: Duration) -> LookupConfig {
    LookupConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new(TEST_TOKEN).unwrap())
        .api_host(HostUrl::new(origin).unwrap())
        .timeout(timeout)
        .build()
        .unwrap()
}

/// A 200 body with one matching variant.
pub fn one_variant(sku: &str, price: &str, title: &str) -> Value {
    json!({
        "data": {
            "productVariants": {
                "edges": [{
                    "node": {
                        "id": "gid://shopify/ProductVariant/4242",
                        "sku": sku,
                        "price": price,
                        "product": { "title": title }
                    }
                }]
            }
        },
        "extensions": {
            "cost": { "requestedQueryCost": 3, "actualQueryCost": 3 }
        }
    })
}

/// A 200 body with no matches.
pub fn no_variants() -> Value {
    json!({ "data": { "productVariants": { "edges": [] } } })
}

/// Returns an origin on which nothing is listening.
pub fn unreachable_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Bodies of every request the fake upstream received.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
