//! Main client for the Shopify Admin API.

use crate::api::{AssetsApi, ThemesApi};
use crate::config::{ClientConfig, API_VERSION};
use crate::error::{ShopifyError, ShopifyResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the theme and asset resources of one shop.
#[derive(Clone)]
pub struct ShopifyClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl ShopifyClient {
    /// Create a new client builder.
    pub fn builder() -> ShopifyClientBuilder {
        ShopifyClientBuilder::new()
    }

    fn from_config(config: ClientConfig) -> ShopifyResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;
        Ok(Self { config, http })
    }

    /// The shop hostname this client talks to.
    pub fn shop(&self) -> &str {
        &self.config.shop
    }

    /// The export URL used as the `src` of a theme duplication.
    pub fn theme_src_url(&self, theme_id: i64) -> String {
        format!("https://{}/admin/themes/{}.json", self.config.shop, theme_id)
    }

    /// Get the themes API.
    pub fn themes(&self) -> ThemesApi<'_> {
        ThemesApi::new(self)
    }

    /// Get the assets API.
    pub fn assets(&self) -> AssetsApi<'_> {
        AssetsApi::new(self)
    }
}

/// Builder for creating a [`ShopifyClient`].
pub struct ShopifyClientBuilder {
    shop: Option<String>,
    access_token: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
}

impl ShopifyClientBuilder {
    pub fn new() -> Self {
        Self {
            shop: None,
            access_token: None,
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the shop hostname, e.g. `my-store.myshopify.com`.
    pub fn shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = Some(shop.into());
        self
    }

    /// Set the Admin API access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the Admin API base URL. Intended for tests; when unset the
    /// base is derived from the shop hostname and pinned API version.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> ShopifyResult<ShopifyClient> {
        let shop = self
            .shop
            .ok_or_else(|| ShopifyError::Config("shop is required".to_string()))?;
        let access_token = self
            .access_token
            .ok_or_else(|| ShopifyError::Config("access_token is required".to_string()))?;

        let base_url = match self.base_url {
            Some(raw) => {
                // Ensure a trailing slash so relative joins stay under the base.
                let raw = if raw.ends_with('/') { raw } else { format!("{}/", raw) };
                Url::parse(&raw)?
            }
            None => Url::parse(&format!("https://{}/admin/api/{}/", shop, API_VERSION))?,
        };

        ShopifyClient::from_config(ClientConfig {
            base_url,
            shop,
            access_token,
            timeout: self.timeout,
        })
    }
}

impl Default for ShopifyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
