// Stdio transport: newline-delimited JSON-RPC over stdin/stdout

use crate::service::McpService;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

/// MCP server bound to the process's stdin/stdout pipe.
///
/// One process, one client, one persistent bidirectional channel; there is
/// no session concept on this transport. Logging goes to stderr so stdout
/// stays a clean protocol channel.
pub struct McpServer {
    service: McpService,
}

impl McpServer {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }

    /// Serve until stdin reaches EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        info!("MCP server listening on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.service.handle_raw(&line).await {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}
