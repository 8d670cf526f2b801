//! The SKU lookup operation.

use std::time::Duration;

use crate::clients::{GraphqlClient, GraphqlError};
use crate::config::{env, LookupConfig};
use crate::lookup::query::{self, VariantBySkuResponse, VARIANT_BY_SKU_QUERY};
use crate::lookup::{LookupError, Sku, VariantResult};

/// Resolves SKUs to variants through the Admin GraphQL API.
///
/// The service holds no mutable state. One instance is shared by every
/// request handler; each [`lookup`](Self::lookup) makes at most one upstream
/// call.
///
/// # Example
///
/// ```rust,ignore
/// use sku_lookup::{LookupConfig, SkuLookupService};
///
/// let config = LookupConfig::from_env()?;
/// let service = SkuLookupService::new(&config)?;
///
/// let result = service.lookup("ABC123").await?;
/// println!("{}", serde_json::to_string(&result)?);
/// ```
#[derive(Debug)]
pub struct SkuLookupService {
    graphql: Option<GraphqlClient>,
    timeout: Duration,
}

// Verify SkuLookupService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SkuLookupService>();
};

impl SkuLookupService {
    /// Creates a service from configuration.
    ///
    /// A configuration with no store domain (and no host override) still
    /// yields a service; its lookups fail with
    /// [`LookupError::UpstreamContact`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the HTTP client cannot be built.
    pub fn new(config: &LookupConfig) -> Result<Self, GraphqlError> {
        let graphql = config
            .upstream_origin()
            .map(|origin| GraphqlClient::new(origin, config))
            .transpose()?;

        Ok(Self {
            graphql,
            timeout: config.timeout(),
        })
    }

    /// Returns the upstream GraphQL endpoint, if configured.
    #[must_use]
    pub fn endpoint_url(&self) -> Option<String> {
        self.graphql.as_ref().map(GraphqlClient::endpoint_url)
    }

    /// Looks up the first variant whose SKU matches `sku`.
    ///
    /// Input is validated before any network activity.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidSku`] if `sku` is empty or blank
    /// - [`LookupError::UpstreamContact`] on transport failure or missing store configuration
    /// - [`LookupError::UpstreamProtocol`] if upstream answers with a status other than 200
    /// - [`LookupError::MalformedResponse`] if the 200 body has an unexpected shape
    pub async fn lookup(&self, sku: &str) -> Result<VariantResult, LookupError> {
        let sku = Sku::new(sku)?;
        self.lookup_sku(&sku).await
    }

    /// Looks up an already-validated SKU.
    ///
    /// # Errors
    ///
    /// As [`lookup`](Self::lookup), minus input validation.
    pub async fn lookup_sku(&self, sku: &Sku) -> Result<VariantResult, LookupError> {
        let Some(graphql) = &self.graphql else {
            return Err(LookupError::UpstreamContact {
                message: format!("store domain is not configured (set {})", env::SHOPIFY_STORE),
            });
        };

        let response = graphql
            .query(VARIANT_BY_SKU_QUERY, Some(query::variables(sku)))
            .await
            .map_err(|e| LookupError::from_graphql(e, self.timeout))?;

        if response.code != 200 {
            return Err(LookupError::UpstreamProtocol {
                status: response.code,
                body: response.body,
            });
        }

        let parsed: VariantBySkuResponse = response
            .json()
            .map_err(|e| LookupError::malformed(format!("body is not the expected JSON: {e}")))?;

        if parsed.has_errors() {
            tracing::warn!(
                %sku,
                errors = %parsed.errors.as_ref().map_or_else(String::new, ToString::to_string),
                "upstream returned GraphQL errors"
            );
        }

        let result = parsed
            .into_first_variant()?
            .map_or(VariantResult::NotFound, VariantResult::Found);

        tracing::debug!(%sku, found = result.is_found(), "variant lookup complete");

        Ok(result)
    }
}
