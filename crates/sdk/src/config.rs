//! Configuration types for the Shopify client.

use std::time::Duration;
use url::Url;

/// Admin API version every request is pinned to.
pub const API_VERSION: &str = "2025-01";

/// Configuration for the Shopify client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Versioned Admin API base, e.g.
    /// `https://my-store.myshopify.com/admin/api/2025-01/`.
    pub base_url: Url,
    /// Shop hostname the base URL was built from.
    pub shop: String,
    /// Static Admin API access token.
    pub access_token: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration for the given shop and token.
    pub fn new(shop: impl Into<String>, access_token: impl Into<String>) -> Result<Self, url::ParseError> {
        let shop = shop.into();
        let base_url = Url::parse(&format!("https://{}/admin/api/{}/", shop, API_VERSION))?;
        Ok(Self {
            base_url,
            shop,
            access_token: access_token.into(),
            timeout: Duration::from_secs(30),
        })
    }
}
