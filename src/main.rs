//! tribe-mcp binary: MCP server over stdin/stdout.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use tribe_mcp::{CommandBridge, McpServer};

/// MCP server exposing TRIBE session search, recall, and extraction tools.
#[derive(Debug, Parser)]
#[command(name = "tribe-mcp", version, about)]
struct Args {
    /// Path to the tribe executable (default: ~/.tribe/bin/tribe, then PATH)
    #[arg(long, value_name = "PATH")]
    tribe_bin: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "tribe_mcp=trace" (logs go to stderr)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> tribe_mcp::Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so all diagnostics go to stderr.
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let bridge = CommandBridge::resolve(args.tribe_bin);
    tracing::debug!(program = %bridge.program().display(), "tribe executable resolved");

    let server = McpServer::new(bridge);
    let stdin = BufReader::new(tokio::io::stdin());
    server.run(stdin, tokio::io::stdout()).await
}
