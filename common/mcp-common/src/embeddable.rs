//! Embeddable MCP trait for in-process execution
//!
//! Lets a host application (or an integration test) call a server's tools
//! directly, without subprocess spawning or stdio framing.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameter deserialization failed
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The tool itself returned an MCP protocol error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be driven in-process.
///
/// Implementations must be `Send + Sync`; tool calls may arrive
/// concurrently from multiple async tasks. Servers built on rmcp's
/// `#[tool_router]` implement this by dispatching on the tool name and
/// delegating to their tool methods.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the name used in MCP configuration files.
    fn server_name(&self) -> &str;

    /// All available tools with their input schemas.
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with JSON parameters.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Optional human-readable description of the server.
    fn server_description(&self) -> Option<&str> {
        None
    }
}
