//! Helpers for building `CallToolResult` responses

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::error::{internal_error, McpResult};

/// Build a successful JSON response from any serializable value.
///
/// Replaces the per-tool boilerplate of serializing, mapping the error,
/// and wrapping the text in a `CallToolResult`.
pub fn json_success<T: Serialize>(data: &T) -> McpResult<CallToolResult> {
    let json = serde_json::to_string_pretty(data).map_err(|e| internal_error(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
