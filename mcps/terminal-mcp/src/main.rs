//! Terminal MCP - shell command execution in a fixed workspace
//!
//! Exposes `run_command`, `run_command_with_timeout`, and `workspace_info`
//! over MCP stdio. The workspace root is resolved once at startup; an
//! invalid root aborts boot.

mod executor;
mod handlers;
mod params;
mod server;
mod types;
mod workspace;

use server::TerminalMcpServer;

mcp_common::serve_stdio!(TerminalMcpServer::from_env()?, "terminal_mcp");
