//! Outbound request description.

/// JSON media type used for request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON `POST` relative to an [`HttpClient`](crate::clients::HttpClient)'s
/// base path.
///
/// # Example
///
/// ```rust
/// use sku_lookup::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::post_json("graphql.json", json!({"query": "{ shop { name } }"}));
/// assert_eq!(request.path, "graphql.json");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Path below the client's base path.
    pub path: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub json_body: serde_json::Value,
}

impl HttpRequest {
    /// A POST carrying `body` as JSON.
    #[must_use]
    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            path: path.into(),
            json_body: body,
        }
    }
}
