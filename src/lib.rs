//! # tribe-mcp
//!
//! MCP (Model Context Protocol) server for TRIBE session history.
//!
//! This crate provides an MCP server that exposes the `tribe` command-line
//! program's search/recall/extraction features as tools for AI agents. It
//! implements the MCP protocol over stdin/stdout using JSON-RPC 2.0.
//!
//! ## 4 Agent-Facing Tools
//!
//! `tribe_search`, `tribe_recall`, `tribe_extract`, `tribe_sessions`
//!
//! Each tool call is translated into one invocation of the tribe CLI; the
//! CLI's combined output comes back as a single text content block. The
//! server holds no state of its own across requests.
//!
//! ## Usage
//!
//! The server is typically run as an executable and configured in AI tools
//! like Claude Desktop:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "tribe": {
//!       "command": "/path/to/tribe-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! For testing or embedding, you can use the library API:
//!
//! ```no_run
//! use tribe_mcp::{CommandBridge, McpServer};
//!
//! # async fn run() -> tribe_mcp::Result<()> {
//! let bridge = CommandBridge::resolve(None);
//! let server = McpServer::new(bridge);
//!
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! server.run(stdin, tokio::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod bridge;
mod convert;
mod error;
mod server;
mod tools;

pub use bridge::CommandBridge;
pub use convert::{optional_string, string_arg, string_arg_or};
pub use error::{Result, TribeError};
pub use server::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpServer};
pub use tools::{ToolDef, ToolRegistry};
