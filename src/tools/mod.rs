//! Tool catalog and dispatch.
//!
//! Exposes the four TRIBE tools for AI agents. Each tool is a thin contract
//! over the `tribe` CLI: the catalog advertises the schema and the dispatch
//! step maps an argument object to a tribe argument list. Nothing here spawns
//! a process; that is the bridge's job.

pub(crate) mod tribe;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::Result;

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "tribe_search")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl ToolDef {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Registry of available MCP tools.
///
/// Built once at startup and immutable for the life of the process.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    /// Create the tool registry with the four TRIBE tools.
    pub fn new() -> Self {
        Self {
            tools: tribe::tools(),
        }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Map a tool call to the tribe argument list it should run.
    ///
    /// Fails only for tool names outside the catalog; argument problems are
    /// absorbed by the lenient coercion policy in [`crate::convert`].
    pub fn resolve(&self, name: &str, args: &Map<String, JsonValue>) -> Result<Vec<String>> {
        tribe::resolve(name, args)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper macro for creating JSON Schema for tool input parameters.
///
/// All tribe tool parameters are strings, so each property is written as
/// `"name": "description"`. The `required` list is emitted only when the
/// schema declares required properties.
#[macro_export]
macro_rules! schema {
    // Object with required and optional properties
    (object {
        required: { $($req_name:literal : $req_desc:literal),* $(,)? },
        optional: { $($opt_name:literal : $opt_desc:literal),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@prop $req_desc));)*
        $(props.insert($opt_name.to_string(), schema!(@prop $opt_desc));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only required properties
    (object {
        required: { $($req_name:literal : $req_desc:literal),* $(,)? }
    }) => {{
        let mut required = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@prop $req_desc));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only optional properties — no "required" key on the wire
    (object {
        optional: { $($opt_name:literal : $opt_desc:literal),* $(,)? }
    }) => {{
        let mut props = serde_json::Map::new();
        $(props.insert($opt_name.to_string(), schema!(@prop $opt_desc));)*

        serde_json::json!({
            "type": "object",
            "properties": props
        })
    }};

    (@prop $desc:literal) => {
        serde_json::json!({"type": "string", "description": $desc})
    };
}
