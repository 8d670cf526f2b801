//! Shopify Admin API version handling.
//!
//! The version is the `<version>` path segment of
//! `/admin/api/<version>/graphql.json`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// Shopify releases stable versions quarterly (January, April, July,
/// October) and exposes an `unstable` version for development. Any
/// well-formed quarterly version is accepted so the proxy can be pointed at
/// a newer release without a code change.
///
/// # Example
///
/// ```rust
/// use sku_lookup::ApiVersion;
///
/// let version: ApiVersion = "2025-01".parse().unwrap();
/// assert_eq!(version.to_string(), "2025-01");
///
/// assert_eq!(ApiVersion::default().to_string(), "2024-10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A stable quarterly release.
    Stable {
        /// Four-digit release year.
        year: u16,
        /// Release month (1, 4, 7 or 10).
        month: u8,
    },
    /// The `unstable` development version.
    Unstable,
}

impl ApiVersion {
    /// The version the lookup query was written against.
    pub const DEFAULT: Self = Self::Stable {
        year: 2024,
        month: 10,
    };
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion { version: s.clone() };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        if !matches!(month, 1 | 4 | 7 | 10) {
            return Err(invalid());
        }

        Ok(Self::Stable { year, month })
    }
}
