// Asset-level tools: file listing, read, write, settings

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, resolve_theme_id, ThemeIdArg, Tool};
use anyhow::{Context, Result};
use serde::Deserialize;
use stitcher_sdk::ShopifyClient;

/// Placeholder returned when an asset carries no textual value.
const BINARY_PLACEHOLDER: &str = "(binary)";
/// Placeholder returned when the settings file has no textual value.
const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Key of the theme settings data file.
const SETTINGS_KEY: &str = "config/settings_data.json";

#[derive(Debug, Deserialize)]
struct ThemeScopedArgs {
    #[serde(default)]
    theme_id: Option<ThemeIdArg>,
}

/// List the file keys of a theme.
pub struct ListThemeFilesTool {
    client: ShopifyClient,
    default_theme_id: Option<i64>,
}

impl ListThemeFilesTool {
    pub fn new(client: ShopifyClient, default_theme_id: Option<i64>) -> Self {
        Self { client, default_theme_id }
    }
}

#[async_trait::async_trait]
impl Tool for ListThemeFilesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_theme_files".to_string(),
            description: "List all files of a theme by key".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "theme_id": json_schema_string("Theme id; defaults to the configured theme"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ThemeScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for list_theme_files")?;
        let theme_id = resolve_theme_id(args.theme_id.as_ref(), self.default_theme_id)?;

        let assets = self.client.assets().list(theme_id).await?;
        let files: Vec<serde_json::Value> = assets
            .iter()
            .map(|asset| {
                serde_json::json!({
                    "key": asset.key,
                    "size": asset.size,
                    "updated_at": asset.updated_at,
                })
            })
            .collect();
        Ok(CallToolResult::text(serde_json::to_string_pretty(&files)?))
    }
}

#[derive(Debug, Deserialize)]
struct ReadFileArgs {
    key: String,
    #[serde(default)]
    theme_id: Option<ThemeIdArg>,
}

/// Read one theme file as text.
pub struct ReadFileTool {
    client: ShopifyClient,
    default_theme_id: Option<i64>,
}

impl ReadFileTool {
    pub fn new(client: ShopifyClient, default_theme_id: Option<i64>) -> Self {
        Self { client, default_theme_id }
    }
}

#[async_trait::async_trait]
impl Tool for ReadFileTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "read_file".to_string(),
            description: "Read the content of a theme file by key, e.g. templates/index.liquid".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "key": json_schema_string("File key within the theme"),
                    "theme_id": json_schema_string("Theme id; defaults to the configured theme"),
                }),
                vec!["key"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ReadFileArgs =
            serde_json::from_value(arguments).context("Invalid arguments for read_file")?;
        let theme_id = resolve_theme_id(args.theme_id.as_ref(), self.default_theme_id)?;

        let asset = self.client.assets().get(theme_id, &args.key).await?;
        let content = asset.value.unwrap_or_else(|| BINARY_PLACEHOLDER.to_string());
        Ok(CallToolResult::text(content))
    }
}

#[derive(Debug, Deserialize)]
struct WriteFileArgs {
    key: String,
    value: String,
    #[serde(default)]
    theme_id: Option<ThemeIdArg>,
}

/// Write one theme file.
pub struct WriteFileTool {
    client: ShopifyClient,
    default_theme_id: Option<i64>,
}

impl WriteFileTool {
    pub fn new(client: ShopifyClient, default_theme_id: Option<i64>) -> Self {
        Self { client, default_theme_id }
    }
}

#[async_trait::async_trait]
impl Tool for WriteFileTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "write_file".to_string(),
            description: "Write content to a theme file, creating the key when missing".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "key": json_schema_string("File key within the theme"),
                    "value": json_schema_string("New file content"),
                    "theme_id": json_schema_string("Theme id; defaults to the configured theme"),
                }),
                vec!["key", "value"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: WriteFileArgs =
            serde_json::from_value(arguments).context("Invalid arguments for write_file")?;
        let theme_id = resolve_theme_id(args.theme_id.as_ref(), self.default_theme_id)?;

        let asset = self.client.assets().put(theme_id, &args.key, &args.value).await?;
        let output = serde_json::json!({
            "success": true,
            "key": asset.key,
            "updated_at": asset.updated_at,
        });
        Ok(CallToolResult::text(serde_json::to_string_pretty(&output)?))
    }
}

/// Read the theme settings data file.
pub struct GetThemeSettingsTool {
    client: ShopifyClient,
    default_theme_id: Option<i64>,
}

impl GetThemeSettingsTool {
    pub fn new(client: ShopifyClient, default_theme_id: Option<i64>) -> Self {
        Self { client, default_theme_id }
    }
}

#[async_trait::async_trait]
impl Tool for GetThemeSettingsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_theme_settings".to_string(),
            description: "Read the theme settings file (config/settings_data.json)".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "theme_id": json_schema_string("Theme id; defaults to the configured theme"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ThemeScopedArgs =
            serde_json::from_value(arguments).context("Invalid arguments for get_theme_settings")?;
        let theme_id = resolve_theme_id(args.theme_id.as_ref(), self.default_theme_id)?;

        let asset = self.client.assets().get(theme_id, SETTINGS_KEY).await?;
        let content = asset.value.unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
        Ok(CallToolResult::text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ShopifyClient {
        ShopifyClient::builder()
            .shop("test-store.myshopify.com")
            .access_token("shpat_test")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn list_theme_files_uses_default_theme_id_when_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "assets": [
                    {"key": "layout/theme.liquid", "size": 4212},
                    {"key": "assets/logo.png"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ListThemeFilesTool::new(client_for(&server), Some(777));
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        let rendered: serde_json::Value =
            serde_json::from_str(result.content[0].as_text()).unwrap();
        assert_eq!(rendered[0]["key"], "layout/theme.liquid");
        assert_eq!(rendered[0]["size"], 4212);
        assert_eq!(rendered[1]["key"], "assets/logo.png");
    }

    #[tokio::test]
    async fn explicit_theme_id_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/42/assets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "assets": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ListThemeFilesTool::new(client_for(&server), Some(777));
        tool.execute(serde_json::json!({"theme_id": "42"})).await.unwrap();
    }

    #[tokio::test]
    async fn omitted_theme_id_without_default_is_an_error() {
        let server = MockServer::start().await;
        let tool = ListThemeFilesTool::new(client_for(&server), None);
        let err = tool.execute(serde_json::json!({})).await.unwrap_err();
        assert!(err.to_string().contains("theme_id"));
    }

    #[tokio::test]
    async fn read_file_returns_text_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .and(query_param("asset[key]", "templates/index.liquid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {"key": "templates/index.liquid", "value": "<h1>{{ shop.name }}</h1>"}
            })))
            .mount(&server)
            .await;

        let tool = ReadFileTool::new(client_for(&server), Some(777));
        let result = tool
            .execute(serde_json::json!({"key": "templates/index.liquid"}))
            .await
            .unwrap();
        assert_eq!(result.content[0].as_text(), "<h1>{{ shop.name }}</h1>");
    }

    #[tokio::test]
    async fn read_file_returns_binary_placeholder_without_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {
                    "key": "assets/logo.png",
                    "attachment": "aGVsbG8=",
                    "content_type": "image/png"
                }
            })))
            .mount(&server)
            .await;

        let tool = ReadFileTool::new(client_for(&server), Some(777));
        let result = tool
            .execute(serde_json::json!({"key": "assets/logo.png"}))
            .await
            .unwrap();
        assert_eq!(result.content[0].as_text(), "(binary)");
    }

    #[tokio::test]
    async fn write_then_read_returns_written_value() {
        let server = MockServer::start().await;

        // Stateful enough for a round trip: the PUT stores, the GET echoes.
        Mock::given(method("PUT"))
            .and(path("/themes/777/assets.json"))
            .and(body_partial_json(serde_json::json!({
                "asset": {"key": "snippets/promo.liquid", "value": "<p>20% off</p>"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {
                    "key": "snippets/promo.liquid",
                    "updated_at": "2024-07-05T15:50:13Z"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .and(query_param("asset[key]", "snippets/promo.liquid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {"key": "snippets/promo.liquid", "value": "<p>20% off</p>"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let write = WriteFileTool::new(client.clone(), Some(777));
        let read = ReadFileTool::new(client, Some(777));

        let written = write
            .execute(serde_json::json!({"key": "snippets/promo.liquid", "value": "<p>20% off</p>"}))
            .await
            .unwrap();
        let rendered: serde_json::Value =
            serde_json::from_str(written.content[0].as_text()).unwrap();
        assert_eq!(rendered["success"], true);
        assert_eq!(rendered["key"], "snippets/promo.liquid");

        let read_back = read
            .execute(serde_json::json!({"key": "snippets/promo.liquid"}))
            .await
            .unwrap();
        assert_eq!(read_back.content[0].as_text(), "<p>20% off</p>");
    }

    #[tokio::test]
    async fn get_theme_settings_reads_settings_data_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .and(query_param("asset[key]", "config/settings_data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {"key": "config/settings_data.json", "value": "{\"current\":{}}"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GetThemeSettingsTool::new(client_for(&server), Some(777));
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.content[0].as_text(), "{\"current\":{}}");
    }

    #[tokio::test]
    async fn get_theme_settings_returns_empty_placeholder_without_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {"key": "config/settings_data.json"}
            })))
            .mount(&server)
            .await;

        let tool = GetThemeSettingsTool::new(client_for(&server), Some(777));
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.content[0].as_text(), "(empty)");
    }

    #[tokio::test]
    async fn upstream_404_propagates_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes/777/assets.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"errors\":\"Not Found\"}"))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ReadFileTool::new(client_for(&server), Some(777));
        let err = tool
            .execute(serde_json::json!({"key": "templates/missing.liquid"}))
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }
}
