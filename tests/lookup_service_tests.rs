//! Integration tests for `SkuLookupService` against a fake upstream.
//!
//! These tests verify the outbound request shape, result reshaping, and the
//! classification of every failure kind.

mod common;

use std::time::{Duration, Instant};

use common::{
    config_for, config_with_timeout, no_variants, one_variant, received_bodies,
    unreachable_origin, GRAPHQL_PATH, TEST_TOKEN,
};
use serde_json::json;
use sku_lookup::lookup::query::VARIANT_BY_SKU_QUERY;
use sku_lookup::{LookupError, SkuLookupService, VariantResult, VariantSummary};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> SkuLookupService {
    SkuLookupService::new(&config_for(server)).unwrap()
}

// ============================================================================
// Successful lookups
// ============================================================================

#[tokio::test]
async fn test_lookup_reshapes_first_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Access-Token", TEST_TOKEN))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_variant(
            "ABC123", "19.99", "Widget",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server).lookup("ABC123").await.unwrap();

    assert_eq!(
        result,
        VariantResult::Found(VariantSummary {
            title: "Widget".to_string(),
            sku: "ABC123".to_string(),
            price: "19.99".to_string(),
        })
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"found": true, "title": "Widget", "sku": "ABC123", "price": "19.99"})
    );
}

#[tokio::test]
async fn test_empty_edges_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(no_variants()))
        .mount(&server)
        .await;

    let result = service_for(&server).lookup("NOPE").await.unwrap();

    assert_eq!(result, VariantResult::NotFound);
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({"found": false}));
}

#[tokio::test]
async fn test_graphql_errors_without_data_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Throttled", "extensions": {"code": "THROTTLED"}}]
        })))
        .mount(&server)
        .await;

    let result = service_for(&server).lookup("ABC123").await.unwrap();
    assert_eq!(result, VariantResult::NotFound);
}

#[tokio::test]
async fn test_repeated_lookups_are_identical() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_variant(
            "ABC123", "19.99", "Widget",
        )))
        .expect(2)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let first = service.lookup("ABC123").await.unwrap();
    let second = service.lookup("ABC123").await.unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Outbound request shape
// ============================================================================

#[tokio::test]
async fn test_sku_travels_only_as_variable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(no_variants()))
        .mount(&server)
        .await;

    service_for(&server).lookup("A-1").await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["query"], json!(VARIANT_BY_SKU_QUERY));
    assert_eq!(bodies[0]["variables"], json!({"query": "sku:A-1"}));
    assert!(!bodies[0]["query"].as_str().unwrap().contains("A-1"));
}

#[tokio::test]
async fn test_graphql_significant_characters_are_contained() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(no_variants()))
        .mount(&server)
        .await;

    let hostile = r#"x") { shop { name } } #"#;
    service_for(&server).lookup(hostile).await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies[0]["query"], json!(VARIANT_BY_SKU_QUERY));
    assert_eq!(
        bodies[0]["variables"]["query"],
        json!(r#"sku:"x\") { shop { name } } #""#)
    );
}

#[tokio::test]
async fn test_surrounding_whitespace_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(no_variants()))
        .mount(&server)
        .await;

    service_for(&server).lookup(" 9780307474728\n").await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies[0]["variables"]["query"], json!("sku:9780307474728"));
}

#[tokio::test]
async fn test_invalid_sku_makes_no_outbound_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(no_variants()))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert_eq!(service.lookup("").await, Err(LookupError::InvalidSku));
    assert_eq!(service.lookup("   ").await, Err(LookupError::InvalidSku));

    assert!(received_bodies(&server).await.is_empty());
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn test_upstream_500_is_protocol_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal upstream failure"))
        .expect(1)
        .mount(&server)
        .await;

    let error = service_for(&server).lookup("ABC123").await.unwrap_err();

    assert_eq!(
        error,
        LookupError::UpstreamProtocol {
            status: 500,
            body: "internal upstream failure".to_string(),
        }
    );
    assert_eq!(error.to_string(), "Shopify error 500: internal upstream failure");
}

#[tokio::test]
async fn test_upstream_401_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"errors":"[API] Invalid API key or access token"}"#),
        )
        .mount(&server)
        .await;

    let error = service_for(&server).lookup("ABC123").await.unwrap_err();

    match error {
        LookupError::UpstreamProtocol { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected UpstreamProtocol, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(202).set_body_json(no_variants()))
        .mount(&server)
        .await;

    let error = service_for(&server).lookup("ABC123").await.unwrap_err();
    assert!(matches!(error, LookupError::UpstreamProtocol { status: 202, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = service_for(&server).lookup("ABC123").await.unwrap_err();
    assert!(matches!(error, LookupError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_edge_missing_title_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"productVariants": {"edges": [
                {"node": {"id": "gid://shopify/ProductVariant/1", "sku": "ABC123", "price": "19.99"}}
            ]}}
        })))
        .mount(&server)
        .await;

    let error = service_for(&server).lookup("ABC123").await.unwrap_err();

    match error {
        LookupError::MalformedResponse { reason } => assert!(reason.contains("product.title")),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_contact_error() {
    let config = config_with_timeout(&unreachable_origin(), Duration::from_secs(5));
    let service = SkuLookupService::new(&config).unwrap();

    let error = service.lookup("ABC123").await.unwrap_err();

    match error {
        LookupError::UpstreamContact { message } => assert!(!message.is_empty()),
        other => panic!("expected UpstreamContact, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_upstream_fails_within_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(no_variants())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = config_with_timeout(&server.uri(), Duration::from_millis(300));
    let service = SkuLookupService::new(&config).unwrap();

    let started = Instant::now();
    let error = service.lookup("ABC123").await.unwrap_err();
    let elapsed = started.elapsed();

    match error {
        LookupError::UpstreamContact { message } => assert!(message.contains("timed out")),
        other => panic!("expected UpstreamContact, got {other:?}"),
    }
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
}
