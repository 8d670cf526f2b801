//! GraphQL client implementation for the Shopify Admin API.

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::LookupConfig;

/// GraphQL API client for the Shopify Admin API.
///
/// Sends documents to `<origin>/admin/api/<version>/graphql.json`. Variables
/// travel in the JSON body next to the document, so values supplied by
/// callers never become part of the GraphQL text.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sku_lookup::clients::GraphqlClient;
/// use serde_json::json;
///
/// let client = GraphqlClient::new("https://my-store.myshopify.com", &config)?;
/// let response = client
///     .query(
///         "query Shop($handle: String!) { shop { name } }",
///         Some(json!({ "handle": "x" })),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Path of the GraphQL endpoint under the versioned base path.
    pub const ENDPOINT: &'static str = "graphql.json";

    /// Creates a new GraphQL client against `origin`.
    ///
    /// The API version, access token and timeout come from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(origin: impl Into<String>, config: &LookupConfig) -> Result<Self, GraphqlError> {
        let http_client = HttpClient::new(
            origin,
            format!("/admin/api/{}", config.api_version()),
            config.access_token(),
            config.timeout(),
        )?;

        Ok(Self { http_client })
    }

    /// Returns the full endpoint URL.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        self.http_client.url_for(Self::ENDPOINT)
    }

    /// Executes a GraphQL document against the Admin API.
    ///
    /// The request body is `{"query": <document>, "variables": <variables>}`;
    /// `variables` is omitted when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for network errors and non-2xx
    /// responses. GraphQL errors inside a 2xx body are not errors here.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let mut body = serde_json::json!({ "query": query });
        if let Some(variables) = variables {
            body["variables"] = variables;
        }

        let request = HttpRequest::post_json(Self::ENDPOINT, body);
        self.http_client.request(request).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, ShopDomain};

    fn create_test_config(version: Option<ApiVersion>) -> LookupConfig {
        let mut builder = LookupConfig::builder().shop(ShopDomain::new("test-shop").unwrap());
        if let Some(version) = version {
            builder = builder.api_version(version);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_graphql_client_uses_default_version() {
        let config = create_test_config(None);
        let client = GraphqlClient::new("https://test-shop.myshopify.com", &config).unwrap();

        assert_eq!(
            client.endpoint_url(),
            "https://test-shop.myshopify.com/admin/api/2024-10/graphql.json"
        );
    }

    #[test]
    fn test_graphql_client_uses_config_version() {
        let config = create_test_config(Some(ApiVersion::Unstable));
        let client = GraphqlClient::new("http://127.0.0.1:9000", &config).unwrap();

        assert_eq!(
            client.endpoint_url(),
            "http://127.0.0.1:9000/admin/api/unstable/graphql.json"
        );
    }
}
