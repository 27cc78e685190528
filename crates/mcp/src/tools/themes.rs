// Theme-level tools: listing, active lookup, duplication

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, resolve_theme_id, ThemeIdArg, Tool};
use anyhow::{Context, Result};
use serde::Deserialize;
use stitcher_sdk::{ShopifyClient, ThemeRole};

/// List every theme in the shop.
pub struct ListThemesTool {
    client: ShopifyClient,
}

impl ListThemesTool {
    pub fn new(client: ShopifyClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListThemesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_themes".to_string(),
            description: "List all themes in the shop with their id, name and role".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let themes = self.client.themes().list().await?;
        Ok(CallToolResult::text(serde_json::to_string_pretty(&themes)?))
    }
}

/// Look up the published theme.
pub struct GetActiveThemeTool {
    client: ShopifyClient,
}

impl GetActiveThemeTool {
    pub fn new(client: ShopifyClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetActiveThemeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_active_theme".to_string(),
            description: "Get the currently published (live) theme".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let themes = self.client.themes().list_by_role(ThemeRole::Main).await?;
        let active = themes.into_iter().next();
        Ok(CallToolResult::text(serde_json::to_string_pretty(&active)?))
    }
}

#[derive(Debug, Deserialize)]
struct DuplicateThemeArgs {
    theme_id: ThemeIdArg,
    new_name: String,
}

/// Duplicate an existing theme into a new unpublished one.
pub struct DuplicateThemeTool {
    client: ShopifyClient,
}

impl DuplicateThemeTool {
    pub fn new(client: ShopifyClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DuplicateThemeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "duplicate_theme".to_string(),
            description: "Duplicate a theme into a new unpublished theme with the given name".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "theme_id": json_schema_string("Id of the theme to duplicate"),
                    "new_name": json_schema_string("Name for the duplicated theme"),
                }),
                vec!["theme_id", "new_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: DuplicateThemeArgs =
            serde_json::from_value(arguments).context("Invalid arguments for duplicate_theme")?;
        let source_id = resolve_theme_id(Some(&args.theme_id), None)?;

        let src = self.client.theme_src_url(source_id);
        let theme = self.client.themes().create(&args.new_name, &src).await?;

        let output = serde_json::json!({
            "success": true,
            "id": theme.id,
            "name": theme.name,
        });
        Ok(CallToolResult::text(serde_json::to_string_pretty(&output)?))
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
    async fn list_themes_outputs_pretty_theme_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "themes": [
                    {"id": 1, "name": "Dawn", "role": "main", "updated_at": "2024-07-05T15:50:13Z"}
                ]
            })))
            .mount(&server)
            .await;

        let tool = ListThemesTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        let rendered: serde_json::Value =
            serde_json::from_str(result.content[0].as_text()).unwrap();
        assert_eq!(rendered[0]["id"], 1);
        assert_eq!(rendered[0]["name"], "Dawn");
        assert_eq!(rendered[0]["role"], "main");
        assert!(rendered[0].get("updated_at").is_some());
    }

    #[tokio::test]
    async fn get_active_theme_filters_by_main_role() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .and(query_param("role", "main"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "themes": [{"id": 9, "name": "Live", "role": "main"}]
            })))
            .mount(&server)
            .await;

        let tool = GetActiveThemeTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        let rendered: serde_json::Value =
            serde_json::from_str(result.content[0].as_text()).unwrap();
        assert_eq!(rendered["id"], 9);
    }

    #[tokio::test]
    async fn get_active_theme_is_null_when_no_main_theme() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "themes": []
            })))
            .mount(&server)
            .await;

        let tool = GetActiveThemeTool::new(client_for(&server));
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.content[0].as_text(), "null");
    }

    #[tokio::test]
    async fn duplicate_theme_creates_unpublished_copy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/themes.json"))
            .and(body_partial_json(serde_json::json!({
                "theme": {
                    "name": "Holiday",
                    "role": "unpublished",
                    "src": "https://test-store.myshopify.com/admin/themes/5.json"
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "theme": {"id": 77, "name": "Holiday", "role": "unpublished"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = DuplicateThemeTool::new(client_for(&server));
        let result = tool
            .execute(serde_json::json!({"theme_id": "5", "new_name": "Holiday"}))
            .await
            .unwrap();

        let rendered: serde_json::Value =
            serde_json::from_str(result.content[0].as_text()).unwrap();
        assert_eq!(rendered["success"], true);
        assert_eq!(rendered["id"], 77);
        assert_eq!(rendered["name"], "Holiday");
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .respond_with(ResponseTemplate::new(401).set_body_string("[API] Invalid API key"))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ListThemesTool::new(client_for(&server));
        let err = tool.execute(serde_json::json!({})).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Invalid API key"));
    }
}
