//! Configuration, result, and error types for the terminal server

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Server configuration, loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub environment: EnvConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
            command: CommandConfig::default(),
            timeouts: TimeoutConfig::default(),
            limits: LimitsConfig::default(),
            environment: EnvConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Root directory commands execute in. Must exist at startup.
    #[serde(default = "default_workspace_root")]
    pub root: String,
}

fn default_workspace_root() -> String {
    "~/workspace".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_workspace_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Shell used to interpret commands
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_shell() -> String {
    "/bin/sh".to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Default timeout in seconds for `run_command`; absent means no timeout
    #[serde(default)]
    pub default_secs: Option<u64>,
    /// Maximum timeout in seconds (hard cap for per-call timeouts)
    #[serde(default = "default_max_timeout")]
    pub max_secs: u64,
}

fn default_max_timeout() -> u64 {
    3600
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            default_secs: None,
            max_secs: default_max_timeout(),
        }
    }
}

impl TimeoutConfig {
    /// Timeout applied when the caller does not request one
    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_secs.map(Duration::from_secs)
    }

    /// Clamp a requested per-call timeout to the configured cap
    pub fn clamp(&self, requested_secs: u64) -> u64 {
        requested_secs.min(self.max_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum captured bytes per stream (stdout/stderr)
    #[serde(default = "default_max_output")]
    pub max_output_bytes: usize,
}

fn default_max_output() -> usize {
    8 * 1024 * 1024 // 8MB
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_output_bytes: default_max_output(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Environment variables to set for spawned commands
    #[serde(default)]
    pub set: HashMap<String, String>,
    /// Environment variables to remove from spawned commands
    #[serde(default)]
    pub remove: Vec<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Result of one command execution.
///
/// Built once per invocation and returned to the caller as JSON; spawn
/// failures and timeouts appear here as data (`succeeded == false`,
/// human-readable `stderr`), never as a protocol error.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandOutput {
    pub command: String,
    /// Terminal exit status; `None` if the process was killed by a signal,
    /// timed out, or never spawned
    pub exit_code: Option<i32>,
    /// True iff the process exited with status 0
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
    pub truncated: bool,
}

/// Response for the `workspace_info` tool
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub root: String,
    pub shell: String,
    pub default_timeout_secs: Option<u64>,
    pub max_timeout_secs: u64,
    pub max_output_bytes: usize,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("invalid workspace: {0}")]
    InvalidWorkspace(String),

    #[error("failed to spawn command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("command timed out after {0}s")]
    Timeout(u64),

    #[error("config error: {0}")]
    Config(String),
}
