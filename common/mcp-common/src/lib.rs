//! MCP Common - Shared plumbing for MCP servers
//!
//! Everything an MCP server binary needs besides its tools:
//!
//! - **Startup**: `serve_stdio!` macro and stderr-only tracing setup
//! - **Results**: `json_success` for building `CallToolResult` responses
//! - **Errors**: helpers for the MCP error format
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process tool calls
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, json_success};
//!
//! // In main.rs - the constructor expression may be fallible
//! serve_stdio!(MyServer::from_env()?, "my_mcp");
//!
//! // In tool implementations
//! fn my_tool(&self) -> McpResult<CallToolResult> {
//!     json_success(&get_some_data())
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, McpResult};
pub use init::init_tracing;
pub use result::json_success;

// Re-export rmcp types that every server touches
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
