//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::instrument;

use lexis_core::{AnalysisOptions, Engine};

use crate::server::LexisServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve the analysis tools over stdin/stdout until the client disconnects.
///
/// Stdout carries JSON-RPC, so logs go to stderr or the configured log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    engine: Engine,
    options: AnalysisOptions,
) -> anyhow::Result<()> {
    tracing::info!("MCP server starting");

    let service = LexisServer::new(engine, options, max_input);
    let server = service
        .serve(rmcp::transport::io::stdio())
        .await
        .context("failed to start MCP server")?;

    tracing::info!("MCP server ready, waiting for client");

    server.waiting().await.context("MCP server error")?;

    tracing::info!("MCP server shutting down");
    Ok(())
}
