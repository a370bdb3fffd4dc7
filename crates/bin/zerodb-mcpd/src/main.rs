//! Daemon entry point for the ZeroDB MCP server.
//!
//! Loads configuration from the environment, acquires the first bearer token,
//! starts the background refresher, and serves MCP over stdio or streamable HTTP.

mod config;

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zerodb_core::Gateway;
use zerodb_core::catalog;
use zerodb_mcp::server::{serve_stdio, serve_streamable_http};

use crate::config::ZeroDbConfig;

/// Logs go to stderr; stdout carries the stdio transport.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();

    let config = ZeroDbConfig::from_args()?;
    let gateway = Arc::new(Gateway::new(config.gateway_config())?);

    let credential = match gateway.credentials().renew().await {
        Ok(credential) => credential,
        Err(err) => {
            error!(error = %err, "failed to start zerodb-mcp");
            return Err(err.into());
        }
    };
    let _refresher = gateway.spawn_refresher(config.refresh_interval);

    info!(
        api_url = gateway.endpoints().base(),
        project_id = config.project_id.as_deref().unwrap_or("<unset>"),
        tools = catalog::TOOLS.len(),
        token_expires_at = %credential.expires_at(),
        "zerodb-mcp {} starting",
        env!("CARGO_PKG_VERSION")
    );

    match config.http {
        Some(http) => serve_streamable_http(gateway, http).await,
        None => serve_stdio(gateway).await,
    }
}
