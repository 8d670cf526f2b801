//! The variant-by-SKU GraphQL document and the shape of its response.

use serde::Deserialize;
use serde_json::json;

use crate::lookup::{LookupError, Sku, VariantSummary};

/// GraphQL document selecting the first variant matching a search filter.
///
/// The filter is bound through `$query`; the document text is constant.
pub const VARIANT_BY_SKU_QUERY: &str = r"query VariantBySku($query: String!) {
  productVariants(first: 1, query: $query) {
    edges {
      node {
        id
        sku
        price
        product {
          title
        }
      }
    }
  }
}";

/// Builds the variables object for [`VARIANT_BY_SKU_QUERY`].
#[must_use]
pub fn variables(sku: &Sku) -> serde_json::Value {
    json!({ "query": sku.search_filter() })
}

/// Top-level GraphQL response body.
#[derive(Debug, Deserialize)]
pub(crate) struct VariantBySkuResponse {
    data: Option<VariantBySkuData>,
    pub(crate) errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct VariantBySkuData {
    #[serde(rename = "productVariants")]
    product_variants: Option<VariantConnection>,
}

#[derive(Debug, Deserialize)]
struct VariantConnection {
    edges: Option<Vec<VariantEdge>>,
}

#[derive(Debug, Deserialize)]
struct VariantEdge {
    node: Option<VariantNode>,
}

#[derive(Debug, Deserialize)]
struct VariantNode {
    sku: Option<String>,
    price: Option<String>,
    product: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
struct ProductNode {
    title: Option<String>,
}

impl VariantBySkuResponse {
    /// Reduces the response to the first matching variant.
    ///
    /// Absent `data`, `productVariants` or `edges`, and an empty edge list,
    /// all mean no match. A present edge must carry every field.
    pub(crate) fn into_first_variant(self) -> Result<Option<VariantSummary>, LookupError> {
        let Some(edge) = self
            .data
            .and_then(|data| data.product_variants)
            .and_then(|connection| connection.edges)
            .and_then(|edges| edges.into_iter().next())
        else {
            return Ok(None);
        };

        let node = edge
            .node
            .ok_or_else(|| LookupError::malformed("first edge has no node"))?;
        let title = node
            .product
            .and_then(|product| product.title)
            .ok_or_else(|| LookupError::malformed("variant node is missing product.title"))?;
        let sku = node
            .sku
            .ok_or_else(|| LookupError::malformed("variant node is missing sku"))?;
        let price = node
            .price
            .ok_or_else(|| LookupError::malformed("variant node is missing price"))?;

        Ok(Some(VariantSummary { title, sku, price }))
    }

    /// Returns `true` if the body carries a non-empty `errors` member.
    pub(crate) fn has_errors(&self) -> bool {
        match &self.errors {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Array(errors)) => !errors.is_empty(),
            Some(_) => true,
        }
    }
}
