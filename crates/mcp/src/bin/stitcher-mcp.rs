// Standalone MCP server binary (stdio transport)

use anyhow::Result;
use stitcher_core::AppConfig;
use stitcher_mcp::{build_service, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout is the protocol channel; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(shop = %config.shop, "Stitcher MCP server starting on stdio");

    let service = build_service(&config)?;
    let server = McpServer::new(service);
    server.run().await?;

    Ok(())
}
