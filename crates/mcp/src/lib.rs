// MCP (Model Context Protocol) server for Shopify theme management
// Seven tools over a shared registry; transports live in server.rs (stdio)
// and in the stitcher-server crate (SSE, streamable HTTP).

pub mod protocol;
pub mod server;
pub mod service;
pub mod tools;

pub use server::McpServer;
pub use service::McpService;

use stitcher_core::AppConfig;
use stitcher_sdk::{ShopifyClient, ShopifyResult};
use std::sync::Arc;
use tools::{
    DuplicateThemeTool, GetActiveThemeTool, GetThemeSettingsTool, ListThemeFilesTool,
    ListThemesTool, ReadFileTool, ToolRegistry, WriteFileTool,
};

/// Build the seven theme tools against one Shopify client.
pub fn build_registry(client: ShopifyClient, default_theme_id: Option<i64>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ListThemesTool::new(client.clone())));
    registry.register(Arc::new(GetActiveThemeTool::new(client.clone())));
    registry.register(Arc::new(DuplicateThemeTool::new(client.clone())));
    registry.register(Arc::new(ListThemeFilesTool::new(client.clone(), default_theme_id)));
    registry.register(Arc::new(ReadFileTool::new(client.clone(), default_theme_id)));
    registry.register(Arc::new(WriteFileTool::new(client.clone(), default_theme_id)));
    registry.register(Arc::new(GetThemeSettingsTool::new(client, default_theme_id)));

    registry
}

/// Build the shared dispatch service from process configuration.
pub fn build_service(config: &AppConfig) -> ShopifyResult<McpService> {
    let client = ShopifyClient::builder()
        .shop(config.shop.clone())
        .access_token(config.access_token.clone())
        .build()?;
    Ok(McpService::new(build_registry(client, config.default_theme_id)))
}
