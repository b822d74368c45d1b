//! Terminal MCP Library
//!
//! Shell command execution inside a fixed workspace directory, exposed
//! over MCP. Commands run via the configured shell with the workspace
//! root as working directory; stdout, stderr, and exit status come back
//! as structured JSON, and runtime failures (spawn errors, timeouts) are
//! reported in the result rather than raised.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use terminal_mcp::TerminalMcpServer;
//!
//! let server = TerminalMcpServer::from_env()?;
//! // Use with in-process calls via EmbeddableMcp or serve via stdio
//! ```

pub mod executor;
pub mod handlers;
pub mod params;
pub mod server;
pub mod types;
pub mod workspace;

// Re-export main server type
pub use server::TerminalMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
