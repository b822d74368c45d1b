//! Parameter types for terminal MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RunCommandParams {
    #[schemars(description = "The shell command to execute in the workspace")]
    pub command: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RunCommandWithTimeoutParams {
    #[schemars(description = "The shell command to execute in the workspace")]
    pub command: String,

    #[schemars(description = "Timeout in seconds (clamped to the server maximum)")]
    pub timeout_secs: u64,
}
