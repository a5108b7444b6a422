//! TRIBE session tools.
//!
//! Four intent-driven tools over the tribe CLI:
//!
//! - `tribe_search`   — Search past coding sessions
//! - `tribe_recall`   — Summarize one session
//! - `tribe_extract`  — Pull code/commands/files out of a session
//! - `tribe_sessions` — List recent sessions
//!
//! Each handler is a pure mapping from the call's argument object to the
//! tribe argument list. Required arguments pass through as "" when missing;
//! optional flags are appended only when a non-empty value was given.

use serde_json::{Map, Value as JsonValue};

use crate::convert::{optional_string, string_arg, string_arg_or};
use crate::error::{Result, TribeError};
use crate::schema;
use crate::tools::ToolDef;

/// Get all TRIBE tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "tribe_search",
            "Search across your coding sessions for relevant past work. Use before \
             implementing features to find existing patterns.",
            schema!(object {
                required: { "query": "Search query (e.g., 'authentication middleware', 'docker compose')" },
                optional: { "limit": "Max results (default: 5)" }
            }),
        ),
        ToolDef::new(
            "tribe_recall",
            "Get a summary of what happened in a specific coding session. Shows files \
             touched, commands run, and key topics.",
            schema!(object {
                required: { "session_id": "Session ID (can be short, e.g., '7347dbe2')" }
            }),
        ),
        ToolDef::new(
            "tribe_extract",
            "Extract specific content from a session: code blocks, shell commands, or \
             files touched.",
            schema!(object {
                required: {
                    "session_id": "Session ID",
                    "type": "Type to extract: 'code', 'commands', or 'files'",
                }
            }),
        ),
        ToolDef::new(
            "tribe_sessions",
            "List recent coding sessions. Use to find session IDs for recall or extract.",
            schema!(object {
                optional: {
                    "limit": "Max sessions to return (default: 10)",
                    "project": "Filter by project name",
                }
            }),
        ),
    ]
}

/// Resolve a tool call to the tribe argument list it runs.
pub fn resolve(name: &str, args: &Map<String, JsonValue>) -> Result<Vec<String>> {
    match name {
        "tribe_search" => Ok(search_args(args)),
        "tribe_recall" => Ok(recall_args(args)),
        "tribe_extract" => Ok(extract_args(args)),
        "tribe_sessions" => Ok(sessions_args(args)),
        _ => Err(TribeError::UnknownTool(name.to_string())),
    }
}

// `tribe search <query> --limit <limit>`
fn search_args(args: &Map<String, JsonValue>) -> Vec<String> {
    let query = string_arg(args, "query");
    let limit = string_arg_or(args, "limit", "5");
    vec!["search".to_string(), query, "--limit".to_string(), limit]
}

// `tribe recall <session_id>`
fn recall_args(args: &Map<String, JsonValue>) -> Vec<String> {
    vec!["recall".to_string(), string_arg(args, "session_id")]
}

// `tribe extract <session_id> --type <type>`
fn extract_args(args: &Map<String, JsonValue>) -> Vec<String> {
    let session_id = string_arg(args, "session_id");
    let extract_type = string_arg_or(args, "type", "code");
    vec![
        "extract".to_string(),
        session_id,
        "--type".to_string(),
        extract_type,
    ]
}

// `tribe query sessions --limit <limit> [--project <project>]`
fn sessions_args(args: &Map<String, JsonValue>) -> Vec<String> {
    let mut argv = vec![
        "query".to_string(),
        "sessions".to_string(),
        "--limit".to_string(),
        string_arg_or(args, "limit", "10"),
    ];
    if let Some(project) = optional_string(args, "project") {
        argv.push("--project".to_string());
        argv.push(project);
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn search_applies_default_limit() {
        let argv = resolve("tribe_search", &args(json!({ "query": "auth middleware" }))).unwrap();
        assert_eq!(argv, ["search", "auth middleware", "--limit", "5"]);
    }

    #[test]
    fn search_honors_explicit_limit() {
        let argv = resolve(
            "tribe_search",
            &args(json!({ "query": "docker", "limit": "12" })),
        )
        .unwrap();
        assert_eq!(argv, ["search", "docker", "--limit", "12"]);
    }

    #[test]
    fn search_missing_query_passes_empty_string() {
        // Required arguments are not validated up front; the tribe CLI
        // reports the failure itself.
        let argv = resolve("tribe_search", &args(json!({}))).unwrap();
        assert_eq!(argv, ["search", "", "--limit", "5"]);
    }

    #[test]
    fn search_wrong_typed_limit_falls_back_to_default() {
        let argv = resolve(
            "tribe_search",
            &args(json!({ "query": "q", "limit": 12 })),
        )
        .unwrap();
        assert_eq!(argv, ["search", "q", "--limit", "5"]);
    }

    #[test]
    fn recall_takes_session_id() {
        let argv = resolve("tribe_recall", &args(json!({ "session_id": "7347dbe2" }))).unwrap();
        assert_eq!(argv, ["recall", "7347dbe2"]);
    }

    #[test]
    fn extract_defaults_type_to_code() {
        let argv = resolve("tribe_extract", &args(json!({ "session_id": "abc" }))).unwrap();
        assert_eq!(argv, ["extract", "abc", "--type", "code"]);

        let argv = resolve(
            "tribe_extract",
            &args(json!({ "session_id": "abc", "type": "commands" })),
        )
        .unwrap();
        assert_eq!(argv, ["extract", "abc", "--type", "commands"]);
    }

    #[test]
    fn sessions_appends_project_only_when_present() {
        let argv = resolve("tribe_sessions", &args(json!({}))).unwrap();
        assert_eq!(argv, ["query", "sessions", "--limit", "10"]);

        let argv = resolve("tribe_sessions", &args(json!({ "project": "foo" }))).unwrap();
        assert_eq!(
            argv,
            ["query", "sessions", "--limit", "10", "--project", "foo"]
        );

        let argv = resolve("tribe_sessions", &args(json!({ "project": "" }))).unwrap();
        assert_eq!(argv, ["query", "sessions", "--limit", "10"]);
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let err = resolve("bogus", &args(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: bogus");
        assert_eq!(err.code(), -32602);
    }

    #[test]
    fn catalog_lists_four_tools_with_required_fields() {
        let tools = tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["tribe_search", "tribe_recall", "tribe_extract", "tribe_sessions"]
        );

        let required = |i: usize| tools[i].input_schema.get("required").cloned();
        assert_eq!(required(0), Some(json!(["query"])));
        assert_eq!(required(1), Some(json!(["session_id"])));
        assert_eq!(required(2), Some(json!(["session_id", "type"])));
        // tribe_sessions has no required arguments, and no "required" key
        assert_eq!(required(3), None);
    }
}
