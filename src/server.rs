//! JSON-RPC 2.0 server over newline-delimited stdio.
//!
//! One line in, at most one line out. Lines that fail to decode are dropped
//! without a response; a decodable request always produces exactly one
//! response line. Processing is strictly sequential: the next line is not
//! read until the previous response has been written and flushed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::bridge::CommandBridge;
use crate::error::{Result, TribeError};
use crate::tools::ToolRegistry;

/// MCP protocol revision advertised by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Server name advertised by `initialize`.
pub const SERVER_NAME: &str = "tribe-mcp";
/// Server version advertised by `initialize`.
pub const SERVER_VERSION: &str = "1.0.0";

/// A decoded JSON-RPC request envelope.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol tag; not validated on the way in.
    #[serde(default)]
    pub jsonrpc: String,
    /// Opaque correlation id, echoed back verbatim. `null` when absent
    /// (notifications), matching the reference behavior of answering them
    /// with `"id":null`.
    #[serde(default)]
    pub id: JsonValue,
    /// Method name; an absent method routes to the unknown-method error.
    #[serde(default)]
    pub method: String,
    /// Raw params payload, interpreted per method.
    #[serde(default)]
    pub params: Option<JsonValue>,
}

/// A JSON-RPC response envelope. Exactly one of `result`/`error` is set.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// Always "2.0".
    pub jsonrpc: &'static str,
    /// Correlation id echoed from the request.
    pub id: JsonValue,
    /// Success payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    /// Failure payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// A JSON-RPC error object.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// Numeric JSON-RPC error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

impl JsonRpcResponse {
    fn result(id: JsonValue, result: JsonValue) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: JsonValue, err: &TribeError) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code: err.code(),
                message: err.to_string(),
            }),
        }
    }
}

/// tools/call params: tool name plus an untyped argument object.
#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Map<String, JsonValue>,
}

/// The MCP server: tool catalog plus the bridge to the tribe CLI.
///
/// Stateless across requests; the catalog is the only long-lived data.
pub struct McpServer {
    registry: ToolRegistry,
    bridge: CommandBridge,
}

impl McpServer {
    /// Create a server around the given command bridge.
    pub fn new(bridge: CommandBridge) -> Self {
        Self {
            registry: ToolRegistry::new(),
            bridge,
        }
    }

    /// Serve newline-delimited JSON-RPC until the reader reaches EOF.
    ///
    /// Blank lines are skipped and undecodable lines are dropped, neither
    /// producing output. Every response is written as a single line and
    /// flushed before the next read.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(line) {
                Ok(req) => req,
                Err(err) => {
                    warn!(%err, "dropping undecodable line");
                    continue;
                }
            };

            let resp = self.handle_request(req).await;
            let mut encoded = serde_json::to_vec(&resp)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }
        Ok(())
    }

    /// Route one decoded request to a response.
    pub async fn handle_request(&self, req: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %req.method, "request");

        match req.method.as_str() {
            "initialize" => JsonRpcResponse::result(
                req.id,
                serde_json::json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": SERVER_VERSION,
                    },
                    "capabilities": { "tools": {} },
                }),
            ),

            "tools/list" => JsonRpcResponse::result(
                req.id,
                serde_json::json!({ "tools": self.registry.tools() }),
            ),

            "tools/call" => self.handle_tool_call(req.id, req.params).await,

            _ => JsonRpcResponse::failure(req.id, &TribeError::MethodNotFound),
        }
    }

    async fn handle_tool_call(&self, id: JsonValue, params: Option<JsonValue>) -> JsonRpcResponse {
        let params: CallToolParams =
            match params.and_then(|p| serde_json::from_value(p).ok()) {
                Some(p) => p,
                None => return JsonRpcResponse::failure(id, &TribeError::InvalidParams),
            };

        let argv = match self.registry.resolve(&params.name, &params.arguments) {
            Ok(argv) => argv,
            Err(err) => return JsonRpcResponse::failure(id, &err),
        };

        // A failing command still yields a tool result: the agent sees the
        // diagnostic as text, never as a protocol error.
        let text = match self.bridge.run(&argv).await {
            Ok(output) => output,
            Err(err) => format!("Error: {err}"),
        };

        JsonRpcResponse::result(
            id,
            serde_json::json!({
                "content": [{ "type": "text", "text": text }],
            }),
        )
    }
}
