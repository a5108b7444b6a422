//! Error types for tribe-mcp.

use thiserror::Error;

/// Errors produced while serving the MCP protocol or bridging to the
/// tribe CLI.
///
/// Protocol-visible variants carry their JSON-RPC wire message as their
/// `Display` text. Bridge variants (`Launch`, `CommandFailed`) are never
/// returned as protocol errors; the server folds them into the tool-result
/// text instead.
#[derive(Debug, Error)]
pub enum TribeError {
    /// The request named a method outside `initialize`/`tools/list`/`tools/call`.
    #[error("Method not found")]
    MethodNotFound,

    /// The `tools/call` params did not have the `{name, arguments}` shape.
    #[error("Invalid params")]
    InvalidParams,

    /// The `tools/call` named a tool that is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tribe executable could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// Program path as it was handed to the OS.
        program: String,
        /// Underlying spawn failure.
        source: std::io::Error,
    },

    /// The tribe executable ran but exited with a non-zero status.
    #[error("{program} exited with {status}")]
    CommandFailed {
        /// Program path as it was handed to the OS.
        program: String,
        /// Exit status reported by the OS.
        status: std::process::ExitStatus,
    },

    /// I/O failure on the stdio transport itself.
    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A response envelope failed to serialize.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TribeError {
    /// JSON-RPC error code for protocol-visible errors.
    pub fn code(&self) -> i64 {
        match self {
            TribeError::MethodNotFound => -32601,
            TribeError::InvalidParams | TribeError::UnknownTool(_) => -32602,
            _ => -32603,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TribeError>;
