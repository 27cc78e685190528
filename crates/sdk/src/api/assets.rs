//! Theme asset (file) resource endpoints.

use crate::client::ShopifyClient;
use crate::error::ShopifyResult;
use stitcher_core::{Asset, AssetEnvelope, AssetsEnvelope};

/// Assets API: list, read, and write the files of one theme.
pub struct AssetsApi<'a> {
    client: &'a ShopifyClient,
}

impl<'a> AssetsApi<'a> {
    pub(crate) fn new(client: &'a ShopifyClient) -> Self {
        Self { client }
    }

    /// List all asset keys of a theme.
    pub async fn list(&self, theme_id: i64) -> ShopifyResult<Vec<Asset>> {
        let value = self
            .client
            .http
            .get(&format!("themes/{}/assets.json", theme_id))
            .await?;
        let envelope: AssetsEnvelope = serde_json::from_value(value)?;
        Ok(envelope.assets)
    }

    /// Fetch one asset by key.
    pub async fn get(&self, theme_id: i64, key: &str) -> ShopifyResult<Asset> {
        let value = self
            .client
            .http
            .get_with_query(
                &format!("themes/{}/assets.json", theme_id),
                &[("asset[key]", key)],
            )
            .await?;
        let envelope: AssetEnvelope = serde_json::from_value(value)?;
        Ok(envelope.asset)
    }

    /// Write one asset. Creates the key if it does not exist yet.
    pub async fn put(&self, theme_id: i64, key: &str, content: &str) -> ShopifyResult<Asset> {
        let body = serde_json::json!({
            "asset": {
                "key": key,
                "value": content,
            }
        });
        let value = self
            .client
            .http
            .put(&format!("themes/{}/assets.json", theme_id), &body)
            .await?;
        let envelope: AssetEnvelope = serde_json::from_value(value)?;
        Ok(envelope.asset)
    }
}
