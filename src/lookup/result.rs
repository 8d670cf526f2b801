//! The normalized lookup result returned to callers.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Title, SKU and price of a matched variant.
///
/// `price` is kept as the decimal string upstream returned; no currency or
/// numeric interpretation is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSummary {
    /// Parent product title.
    pub title: String,
    /// Variant SKU as stored upstream.
    pub sku: String,
    /// Variant price as returned upstream.
    pub price: String,
}

/// Outcome of a lookup.
///
/// Serializes to exactly `{"found": false}` or
/// `{"found": true, "title": .., "sku": .., "price": ..}`.
///
/// # Example
///
/// ```rust
/// use sku_lookup::lookup::{VariantResult, VariantSummary};
/// use serde_json::json;
///
/// let found = VariantResult::Found(VariantSummary {
///     title: "Widget".to_string(),
///     sku: "ABC123".to_string(),
///     price: "19.99".to_string(),
/// });
/// assert_eq!(
///     serde_json::to_value(&found).unwrap(),
///     json!({"found": true, "title": "Widget", "sku": "ABC123", "price": "19.99"})
/// );
///
/// assert_eq!(
///     serde_json::to_value(&VariantResult::NotFound).unwrap(),
///     json!({"found": false})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantResult {
    /// No variant matched.
    NotFound,
    /// The first matching variant.
    Found(VariantSummary),
}

impl VariantResult {
    /// Returns `true` if a variant matched.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl Serialize for VariantResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::NotFound => {
                let mut state = serializer.serialize_struct("VariantResult", 1)?;
                state.serialize_field("found", &false)?;
                state.end()
            }
            Self::Found(variant) => {
                let mut state = serializer.serialize_struct("VariantResult", 4)?;
                state.serialize_field("found", &true)?;
                state.serialize_field("title", &variant.title)?;
                state.serialize_field("sku", &variant.sku)?;
                state.serialize_field("price", &variant.price)?;
                state.end()
            }
        }
    }
}
