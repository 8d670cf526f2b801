//! The lookup key.

use std::fmt;

use crate::lookup::LookupError;

/// A validated, trimmed SKU.
///
/// # Example
///
/// ```rust
/// use sku_lookup::lookup::Sku;
///
/// let sku = Sku::new(" ABC-123\n").unwrap();
/// assert_eq!(sku.as_ref(), "ABC-123");
/// assert_eq!(sku.search_filter(), "sku:ABC-123");
///
/// assert!(Sku::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sku(String);

impl Sku {
    /// Creates a SKU from caller input.
    ///
    /// Surrounding whitespace is dropped (scanners often append a newline).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidSku`] if nothing remains after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LookupError> {
        let sku = raw.as_ref().trim();
        if sku.is_empty() {
            return Err(LookupError::InvalidSku);
        }
        Ok(Self(sku.to_string()))
    }

    /// Returns the upstream search filter selecting this SKU.
    ///
    /// SKUs made only of search-inert characters are emitted bare
    /// (`sku:A-1`). Anything else is emitted as an escaped phrase
    /// (`sku:"A 1"`) so spaces, colons, or operators cannot change which
    /// variants match.
    #[must_use]
    pub fn search_filter(&self) -> String {
        if self.0.chars().all(is_search_inert) {
            return format!("sku:{}", self.0);
        }

        let mut filter = String::with_capacity(self.0.len() + 6);
        filter.push_str("sku:\"");
        for c in self.0.chars() {
            if matches!(c, '"' | '\\') {
                filter.push('\\');
            }
            filter.push(c);
        }
        filter.push('"');
        filter
    }
}

const fn is_search_inert(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/')
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
