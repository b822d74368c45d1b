//! Tool handlers
//!
//! Each handler validates its parameters, runs the command through the
//! executor, and wraps the result as JSON. Execution outcomes - including
//! spawn failures and timeouts - always come back as a normal result; the
//! only MCP errors raised here are for malformed parameters.

use std::time::Duration;

use mcp_common::{invalid_params, json_success, CallToolResult, McpError, McpResult};

use crate::executor::CommandExecutor;
use crate::params::{RunCommandParams, RunCommandWithTimeoutParams};
use crate::types::{Config, WorkspaceInfo};

pub async fn run_command(
    executor: &CommandExecutor,
    config: &Config,
    params: RunCommandParams,
) -> McpResult<CallToolResult> {
    validate_command(&params.command)?;

    let output = executor
        .execute(&params.command, config.timeouts.default_timeout())
        .await;

    json_success(&output)
}

pub async fn run_command_with_timeout(
    executor: &CommandExecutor,
    config: &Config,
    params: RunCommandWithTimeoutParams,
) -> McpResult<CallToolResult> {
    validate_command(&params.command)?;
    if params.timeout_secs == 0 {
        return Err(invalid_params("timeout_secs must be positive"));
    }

    let secs = config.timeouts.clamp(params.timeout_secs);
    let output = executor
        .execute(&params.command, Some(Duration::from_secs(secs)))
        .await;

    json_success(&output)
}

pub async fn workspace_info(
    executor: &CommandExecutor,
    config: &Config,
) -> McpResult<CallToolResult> {
    json_success(&WorkspaceInfo {
        root: executor.workspace().root().display().to_string(),
        shell: executor.shell().to_string(),
        default_timeout_secs: config.timeouts.default_secs,
        max_timeout_secs: config.timeouts.max_secs,
        max_output_bytes: config.limits.max_output_bytes,
    })
}

fn validate_command(command: &str) -> Result<(), McpError> {
    if command.trim().is_empty() {
        return Err(invalid_params("command must not be empty"));
    }
    Ok(())
}
