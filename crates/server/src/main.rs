//! vidcat-mcp server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;
use vidcat_client::{FetchConfig, SheetClient};
use vidcat_core::{AppConfig, FreshnessCache};

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let sheet = SheetClient::new(config.require_sheet_csv_url()?, FetchConfig::from(&config))?;

    let source_url = sheet.source_url().to_string();
    let catalog = Arc::new(FreshnessCache::new(Arc::new(sheet), config.cache_ttl_seconds));

    tracing::info!(
        source = %source_url,
        ttl_seconds = catalog.ttl_seconds(),
        max_results = config.max_results,
        "Starting vidcat-mcp server on stdio transport"
    );
    let handler = handler::VideoCatalogServer::new(catalog, config);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
