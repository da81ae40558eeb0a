//! Trading pair identifiers (BTC-USD format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair identifier (BASE-QUOTE format, e.g. "BTC-USD")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// BTC-USD trading pair
    pub const BTC_USD: &'static str = "BTC-USD";
    /// ETH-USD trading pair
    pub const ETH_USD: &'static str = "ETH-USD";
    /// ETH-BTC trading pair
    pub const ETH_BTC: &'static str = "ETH-BTC";

    /// Create a new product id from a string
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the product id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base currency (e.g., "BTC" from "BTC-USD")
    pub fn base(&self) -> Option<&str> {
        self.0.split('-').next()
    }

    /// Get the quote currency (e.g., "USD" from "BTC-USD")
    pub fn quote(&self) -> Option<&str> {
        self.0.split('-').nth(1)
    }
}

impl FromStr for ProductId {
    type Err = ProductIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Validate format: BASE-QUOTE
        if !s.contains('-') {
            return Err(ProductIdParseError::MissingDash(s.to_string()));
        }

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(ProductIdParseError::InvalidFormat(s.to_string()));
        }

        if parts[0].is_empty() || parts[1].is_empty() {
            return Err(ProductIdParseError::EmptyPart(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Error parsing a product id
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductIdParseError {
    #[error("Product id must contain '-': {0}")]
    MissingDash(String),

    #[error("Invalid product id format: {0}")]
    InvalidFormat(String),

    #[error("Product id has empty base or quote: {0}")]
    EmptyPart(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parse() {
        let product: ProductId = "BTC-USD".parse().unwrap();
        assert_eq!(product.as_str(), "BTC-USD");
        assert_eq!(product.base(), Some("BTC"));
        assert_eq!(product.quote(), Some("USD"));
    }

    #[test]
    fn test_product_id_parse_error() {
        assert!("BTCUSD".parse::<ProductId>().is_err());
        assert!("-USD".parse::<ProductId>().is_err());
        assert!("BTC-".parse::<ProductId>().is_err());
        assert!("BTC-USD-PERP".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_id_serde() {
        let product = ProductId::new("ETH-USD");
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, "\"ETH-USD\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
