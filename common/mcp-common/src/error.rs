//! Error helpers in the MCP format

use rmcp::ErrorData as McpError;

/// Result type for MCP tool implementations
pub type McpResult<T> = Result<T, McpError>;

/// Create an internal MCP error with a message.
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an invalid-params MCP error with a message.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
