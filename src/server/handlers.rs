//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::lookup::{SkuLookupService, VariantResult};
use crate::server::error::ApiError;

/// Query string of `GET /api/variant_by_sku`.
///
/// `sku` is optional at the extractor level so a missing parameter is
/// answered with the same 400 body as an empty one.
#[derive(Debug, Deserialize)]
pub struct VariantBySkuParams {
    /// The SKU to look up.
    pub sku: Option<String>,
}

/// `GET /api/variant_by_sku?sku=<value>`
///
/// An undecodable query string is answered through [`ApiError`] like every
/// other failure, so the body is always `{"detail": ...}`.
pub async fn variant_by_sku(
    State(service): State<Arc<SkuLookupService>>,
    params: Result<Query<VariantBySkuParams>, QueryRejection>,
) -> Result<Json<VariantResult>, ApiError> {
    let Query(params) = params?;
    let sku = params.sku.unwrap_or_default();
    let result = service.lookup(&sku).await?;
    Ok(Json(result))
}
