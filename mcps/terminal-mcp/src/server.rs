//! MCP server implementation for the terminal
//!
//! Defines the server that exposes command execution as tools. Handler
//! implementations live in the handlers module. Construction is fallible:
//! the workspace root is resolved and validated here, and a bad root
//! aborts startup rather than failing per call.

use std::path::PathBuf;

use mcp_common::{
    async_trait, CallToolResult, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError, Tool,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::executor::CommandExecutor;
use crate::handlers;
use crate::params::{RunCommandParams, RunCommandWithTimeoutParams};
use crate::types::{Config, TerminalError};
use crate::workspace::Workspace;

const INSTRUCTIONS: &str =
    "Terminal MCP server. Executes shell commands inside a fixed workspace \
     directory and returns captured stdout, stderr, and exit status as JSON. \
     Failures are reported in the result, never as protocol errors.";

/// The Terminal MCP Server
#[derive(Clone)]
pub struct TerminalMcpServer {
    executor: CommandExecutor,
    config: Config,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl TerminalMcpServer {
    /// Create a server from config found in standard locations.
    ///
    /// Config is searched in order:
    /// 1. `TERMINAL_CONFIG_PATH` env var (errors here are fatal)
    /// 2. `./terminal-mcp.toml`
    /// 3. `$XDG_CONFIG_HOME/terminal-mcp/config.toml`
    /// 4. `~/.terminal-mcp.toml`
    /// 5. Default config if none found
    pub fn from_env() -> Result<Self, TerminalError> {
        Self::with_config(Self::load_config()?)
    }

    /// Create a server with explicit config, validating the workspace root
    pub fn with_config(config: Config) -> Result<Self, TerminalError> {
        let workspace = Workspace::resolve(&config.workspace.root)?;
        tracing::info!("Workspace root: {}", workspace.root().display());

        let executor = CommandExecutor::new(&config, workspace);

        Ok(Self {
            executor,
            config,
            tool_router: Self::tool_router(),
        })
    }

    fn load_config() -> Result<Config, TerminalError> {
        // An explicitly configured path must work; anything else is a
        // silent fallback to defaults.
        if let Ok(env_path) = std::env::var("TERMINAL_CONFIG_PATH") {
            let path = PathBuf::from(&env_path);
            let content = std::fs::read_to_string(&path)
                .map_err(|e| TerminalError::Config(format!("{}: {}", path.display(), e)))?;
            let config = toml::from_str(&content)
                .map_err(|e| TerminalError::Config(format!("{}: {}", path.display(), e)))?;
            tracing::info!("Loaded config from TERMINAL_CONFIG_PATH={}", path.display());
            return Ok(config);
        }

        let mut config_paths = vec![PathBuf::from("terminal-mcp.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("terminal-mcp").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            config_paths.push(home.join(".terminal-mcp.toml"));
        }

        for path in config_paths {
            if !path.exists() {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!("Using default configuration");
        Ok(Config::default())
    }

    #[tool(description = "Execute a shell command in the workspace with the default timeout")]
    async fn run_command(
        &self,
        Parameters(params): Parameters<RunCommandParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::run_command(&self.executor, &self.config, params).await
    }

    #[tool(description = "Execute a shell command with an explicit timeout (clamped to server max)")]
    async fn run_command_with_timeout(
        &self,
        Parameters(params): Parameters<RunCommandWithTimeoutParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::run_command_with_timeout(&self.executor, &self.config, params).await
    }

    #[tool(description = "Report the resolved workspace root, shell, and execution limits")]
    async fn workspace_info(&self) -> Result<CallToolResult, McpError> {
        handlers::workspace_info(&self.executor, &self.config).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TerminalMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for TerminalMcpServer {
    fn server_name(&self) -> &str {
        "terminal"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "run_command" => {
                let params: RunCommandParams = serde_json::from_value(params)?;
                self.run_command(Parameters(params)).await.map_err(Into::into)
            }

            "run_command_with_timeout" => {
                let params: RunCommandWithTimeoutParams = serde_json::from_value(params)?;
                self.run_command_with_timeout(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "workspace_info" => self.workspace_info().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
