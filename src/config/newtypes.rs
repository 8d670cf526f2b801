//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper checks its contents on construction, so a value that exists
//! is a value that can be used to build the upstream request.

use crate::error::ConfigError;
use std::fmt;

/// A validated Shopify Admin API access token.
///
/// The token is sent as the `X-Shopify-Access-Token` header on every
/// upstream call. Its `Debug` output is masked so configuration can be
/// logged without leaking the secret.
///
/// # Example
///
/// ```rust
/// use sku_lookup::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The store's `*.myshopify.com` host.
///
/// `SHOPIFY_STORE` is often pasted from the browser, so a leading
/// `https://` and a trailing `/` are tolerated. A bare store handle gets the
/// `.myshopify.com` suffix; any other dotted host is rejected.
///
/// # Example
///
/// ```rust
/// use sku_lookup::ShopDomain;
///
/// let domain = ShopDomain::new("https://Bukz.myshopify.com/").unwrap();
/// assert_eq!(domain.as_ref(), "bukz.myshopify.com");
/// assert_eq!(ShopDomain::new("bukz").unwrap(), domain);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Parses and normalizes a store domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if no valid store handle
    /// can be extracted.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = domain.into();
        let invalid = || ConfigError::InvalidShopDomain {
            domain: raw.trim().to_string(),
        };

        let host = raw.trim().to_ascii_lowercase();
        let host = host
            .strip_prefix("https://")
            .or_else(|| host.strip_prefix("http://"))
            .unwrap_or(host.as_str())
            .trim_end_matches('/');

        let handle = match host.strip_suffix(Self::SUFFIX) {
            Some(handle) => handle,
            None if host.contains('.') => return Err(invalid()),
            None => host,
        };

        if !is_store_handle(handle) {
            return Err(invalid());
        }
        Ok(Self(format!("{handle}{}", Self::SUFFIX)))
    }
}

/// Lowercase letters, digits, and inner hyphens.
fn is_store_handle(handle: &str) -> bool {
    !handle.is_empty()
        && !handle.starts_with('-')
        && !handle.ends_with('-')
        && handle
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated upstream origin override.
///
/// When set, upstream calls go to this origin instead of
/// `https://<shop domain>`. Used for local fakes and egress proxies.
///
/// # Example
///
/// ```rust
/// use sku_lookup::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:9000/").unwrap();
/// assert_eq!(url.origin(), "http://127.0.0.1:9000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    authority_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme, a
    /// scheme other than `http`/`https`, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        let host_end = url[host_start..authority_end]
            .find(':')
            .map_or(authority_end, |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self { url, authority_end })
    }

    /// Returns `scheme://host[:port]`, dropping any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.authority_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_blank() {
        assert!(matches!(AccessToken::new(""), Err(ConfigError::EmptyAccessToken)));
        assert!(matches!(AccessToken::new("   "), Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("shpat_super_secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super_secret"));
    }

    #[test]
    fn test_shop_domain_normalizes_short_format() {
        let domain = ShopDomain::new("my-store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
    }

    #[test]
    fn test_shop_domain_accepts_pasted_url() {
        let domain = ShopDomain::new("https://bukz.myshopify.com/").unwrap();
        assert_eq!(domain.as_ref(), "bukz.myshopify.com");
        assert!(ShopDomain::new("https://bukz.myshopify.com/admin").is_err());
    }

    #[test]
    fn test_shop_domain_accepts_full_format_case_insensitively() {
        let domain = ShopDomain::new("  Bukz-Store.myshopify.com ").unwrap();
        assert_eq!(domain.as_ref(), "bukz-store.myshopify.com");
        assert_eq!(domain.to_string(), "bukz-store.myshopify.com");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_domains() {
        assert!(ShopDomain::new("").is_err());
        assert!(ShopDomain::new("my store").is_err());
        assert!(ShopDomain::new("my_store").is_err());
        assert!(ShopDomain::new("-my-store").is_err());
        assert!(ShopDomain::new("my-store-").is_err());
        assert!(ShopDomain::new("my-store.otherdomain.com").is_err());
        assert!(ShopDomain::new(".myshopify.com").is_err());
        assert_eq!(
            ShopDomain::new(" my store ").unwrap_err(),
            ConfigError::InvalidShopDomain {
                domain: "my store".to_string()
            }
        );
    }

    #[test]
    fn test_host_url_splits_origin_from_path() {
        let url = HostUrl::new("https://proxy.internal:8443/shopify").unwrap();
        assert_eq!(url.origin(), "https://proxy.internal:8443");

        let url = HostUrl::new("http://localhost").unwrap();
        assert_eq!(url.origin(), "http://localhost");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("localhost:9000").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("ftp://example.com").is_err());
        assert!(HostUrl::new("http://:9000").is_err());
    }
}
