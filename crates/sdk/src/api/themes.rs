//! Theme resource endpoints.

use crate::client::ShopifyClient;
use crate::error::ShopifyResult;
use stitcher_core::{Theme, ThemeEnvelope, ThemeRole, ThemesEnvelope};

/// Themes API: list shop themes and create new ones by duplication.
pub struct ThemesApi<'a> {
    client: &'a ShopifyClient,
}

impl<'a> ThemesApi<'a> {
    pub(crate) fn new(client: &'a ShopifyClient) -> Self {
        Self { client }
    }

    /// List all themes in the shop.
    pub async fn list(&self) -> ShopifyResult<Vec<Theme>> {
        let value = self.client.http.get("themes.json").await?;
        let envelope: ThemesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.themes)
    }

    /// List themes filtered by role.
    pub async fn list_by_role(&self, role: ThemeRole) -> ShopifyResult<Vec<Theme>> {
        let value = self
            .client
            .http
            .get_with_query("themes.json", &[("role", role.to_string())])
            .await?;
        let envelope: ThemesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.themes)
    }

    /// Create an unpublished theme sourced from another theme's export URL.
    pub async fn create(&self, name: &str, src: &str) -> ShopifyResult<Theme> {
        let body = serde_json::json!({
            "theme": {
                "name": name,
                "role": ThemeRole::Unpublished,
                "src": src,
            }
        });
        let value = self.client.http.post("themes.json", &body).await?;
        let envelope: ThemeEnvelope = serde_json::from_value(value)?;
        Ok(envelope.theme)
    }
}
