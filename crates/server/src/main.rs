use anyhow::Result;
use clap::{Parser, ValueEnum};
use stitcher_core::AppConfig;

mod api;
mod sse;
mod streamable;

/// HTTP transport binding to expose; one per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// SSE stream plus a companion message endpoint keyed by session id
    Sse,
    /// Stateless per-request POST endpoint
    Streamable,
}

#[derive(Parser, Debug)]
#[command(name = "stitcher")]
#[command(about = "Shopify theme MCP server over HTTP transports", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Transport binding to expose
    #[arg(long, value_enum, default_value = "streamable")]
    transport: TransportKind,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stitcher=info,tower_http=debug".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(shop = %config.shop, transport = ?args.transport, "starting Stitcher");

    let service = stitcher_mcp::build_service(&config)?;
    let state = api::AppState::new(service, config.shop);

    let addr = format!("{}:{}", args.host, args.port);
    api::serve(&addr, state, args.transport).await?;

    Ok(())
}
