//! Configuration for the SKU lookup proxy.
//!
//! Configuration is read once at startup, validated, and then shared
//! read-only by every request. Nothing in the lookup path reads the process
//! environment; the [`LookupConfig`] is passed in explicitly.
//!
//! # Overview
//!
//! - [`LookupConfig`]: the immutable configuration
//! - [`LookupConfigBuilder`]: fluent construction, used by tests and [`LookupConfig::from_env`]
//! - [`ShopDomain`], [`AccessToken`], [`HostUrl`], [`ApiVersion`]: validated values
//!
//! # Example
//!
//! ```rust
//! use sku_lookup::{AccessToken, LookupConfig, ShopDomain};
//!
//! let config = LookupConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.upstream_origin().unwrap(),
//!     "https://my-store.myshopify.com"
//! );
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default outbound request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default listen port when neither `BIND_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 8000;

/// Environment variable names read by [`LookupConfig::from_env`].
pub mod env {
    /// Store domain.
    pub const SHOPIFY_STORE: &str = "SHOPIFY_STORE";
    /// Admin API access token.
    pub const SHOPIFY_API_TOKEN: &str = "SHOPIFY_API_TOKEN";
    /// Admin API version.
    pub const SHOPIFY_API_VERSION: &str = "SHOPIFY_API_VERSION";
    /// Upstream origin override.
    pub const SHOPIFY_API_HOST: &str = "SHOPIFY_API_HOST";
    /// Outbound timeout in seconds.
    pub const LOOKUP_TIMEOUT_SECS: &str = "LOOKUP_TIMEOUT_SECS";
    /// Full listen address.
    pub const BIND_ADDR: &str = "BIND_ADDR";
    /// Listen port, used when `BIND_ADDR` is unset.
    pub const PORT: &str = "PORT";
    /// Comma-separated CORS origins.
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Directory holding `templates/` and `static/`.
    pub const WEB_ROOT: &str = "WEB_ROOT";
}

/// Immutable configuration for the proxy.
///
/// The store domain and access token are optional: a proxy missing either
/// still starts and serves requests, but lookups fail upstream. Call
/// [`LookupConfig::warn_if_incomplete`] at startup to surface this.
///
/// # Thread Safety
///
/// `LookupConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct LookupConfig {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    timeout: Duration,
    bind_addr: SocketAddr,
    allowed_origins: Vec<String>,
    web_root: Option<PathBuf>,
}

// Verify LookupConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LookupConfig>();
};

impl LookupConfig {
    /// Creates a new builder for constructing a `LookupConfig`.
    #[must_use]
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// Unset and empty variables are treated the same way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// This is the testable form of [`LookupConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a key maps to an invalid value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use sku_lookup::LookupConfig;
    ///
    /// let vars = HashMap::from([("SHOPIFY_STORE", "my-store"), ("PORT", "9090")]);
    /// let config = LookupConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    ///
    /// assert_eq!(config.bind_addr().port(), 9090);
    /// assert!(config.access_token().is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(shop) = get(env::SHOPIFY_STORE) {
            builder = builder.shop(ShopDomain::new(shop)?);
        }
        if let Some(token) = get(env::SHOPIFY_API_TOKEN) {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        if let Some(version) = get(env::SHOPIFY_API_VERSION) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = get(env::SHOPIFY_API_HOST) {
            builder = builder.api_host(HostUrl::new(host)?);
        }
        if let Some(value) = get(env::LOOKUP_TIMEOUT_SECS) {
            builder = builder.timeout(parse_timeout(&value)?);
        }
        if let Some(addr) = get(env::BIND_ADDR) {
            builder = builder.bind_addr(parse_bind_addr(&addr)?);
        } else if let Some(port) = get(env::PORT) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { addr: port.clone() })?;
            builder = builder.bind_addr(SocketAddr::from(([0, 0, 0, 0], port)));
        }
        if let Some(origins) = get(env::CORS_ALLOWED_ORIGINS) {
            builder = builder.allowed_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from),
            );
        }
        if let Some(root) = get(env::WEB_ROOT) {
            builder = builder.web_root(root);
        }

        builder.build()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the Admin API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the outbound request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns the allowed CORS origins. Empty means no CORS layer.
    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Returns the web root, if configured.
    #[must_use]
    pub fn web_root(&self) -> Option<&Path> {
        self.web_root.as_deref()
    }

    /// Returns the upstream origin: the override if set, else `https://<shop>`.
    ///
    /// `None` when neither is configured.
    #[must_use]
    pub fn upstream_origin(&self) -> Option<String> {
        self.api_host.as_ref().map_or_else(
            || self.shop.as_ref().map(|shop| format!("https://{shop}")),
            |host| Some(host.origin().to_string()),
        )
    }

    /// Returns the names of the upstream settings that are not configured.
    #[must_use]
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.shop.is_none() {
            missing.push(env::SHOPIFY_STORE);
        }
        if self.access_token.is_none() {
            missing.push(env::SHOPIFY_API_TOKEN);
        }
        missing
    }

    /// Logs a warning if the store domain or access token is missing.
    ///
    /// Returns `true` when a warning was emitted.
    pub fn warn_if_incomplete(&self) -> bool {
        let missing = self.missing_settings();
        if missing.is_empty() {
            return false;
        }
        tracing::warn!(
            missing = ?missing,
            "upstream settings are not configured; every lookup will fail until they are set"
        );
        true
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeout {
        value: value.to_string(),
    };
    let secs: f64 = value.trim().parse().map_err(|_| invalid())?;
    let timeout = Duration::try_from_secs_f64(secs).map_err(|_| invalid())?;
    if timeout.is_zero() {
        return Err(invalid());
    }
    Ok(timeout)
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBindAddr {
            addr: value.to_string(),
        })
}

/// Builder for constructing [`LookupConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::DEFAULT`] (`2024-10`)
/// - `timeout`: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `bind_addr`: `0.0.0.0:8000`
/// - everything else: unset
#[derive(Debug, Default)]
pub struct LookupConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
    bind_addr: Option<SocketAddr>,
    allowed_origins: Vec<String>,
    web_root: Option<PathBuf>,
}

impl LookupConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store domain.
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the Admin API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes upstream calls to this origin instead of the store domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the outbound request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the listen address.
    #[must_use]
    pub const fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Sets the allowed CORS origins.
    #[must_use]
    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the directory holding `templates/index.html` and `static/`.
    #[must_use]
    pub fn web_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.web_root = Some(root.into());
        self
    }

    /// Builds the [`LookupConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is zero.
    pub fn build(self) -> Result<LookupConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        Ok(LookupConfig {
            shop: self.shop,
            access_token: self.access_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            timeout,
            bind_addr: self
                .bind_addr
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))),
            allowed_origins: self.allowed_origins,
            web_root: self.web_root,
        })
    }
}
