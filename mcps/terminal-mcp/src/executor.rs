//! Command execution inside the workspace
//!
//! The executor spawns `<shell> -c <command>` with the workspace root as
//! working directory and waits synchronously for termination. It is
//! stateless between calls and reentrant; concurrent invocations share
//! nothing mutable.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::types::{CommandOutput, Config, EnvConfig, TerminalError};
use crate::workspace::Workspace;

/// Executes shell commands in the workspace and captures their output.
///
/// Runtime failures never surface as errors: spawn failures and timeouts
/// are reported inside the returned [`CommandOutput`] so the tool boundary
/// can always answer with a result.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    shell: String,
    workspace: Workspace,
    environment: EnvConfig,
    max_output_bytes: usize,
}

impl CommandExecutor {
    pub fn new(config: &Config, workspace: Workspace) -> Self {
        Self {
            shell: config.command.shell.clone(),
            workspace,
            environment: config.environment.clone(),
            max_output_bytes: config.limits.max_output_bytes,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Run a command, optionally bounded by a timeout.
    ///
    /// Both output streams are captured as lossy UTF-8 (undecodable bytes
    /// are substituted) and capped at the configured limit per stream.
    pub async fn execute(&self, command: &str, timeout: Option<Duration>) -> CommandOutput {
        tracing::info!(command, "Running command");

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .current_dir(self.workspace.root())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        for (key, value) in &self.environment.set {
            cmd.env(key, value);
        }
        for key in &self.environment.remove {
            cmd.env_remove(key);
        }

        let waited = match timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(done) => done,
                Err(_elapsed) => {
                    // Dropping the output future kills the child via
                    // kill_on_drop; partial output is discarded.
                    return self.report_failure(command, TerminalError::Timeout(limit.as_secs()));
                }
            },
            None => cmd.output().await,
        };

        match waited {
            Ok(output) => {
                let (stdout, stdout_truncated) =
                    decode_capped(&output.stdout, self.max_output_bytes);
                let (stderr, stderr_truncated) =
                    decode_capped(&output.stderr, self.max_output_bytes);
                let exit_code = output.status.code();

                CommandOutput {
                    command: command.to_string(),
                    exit_code,
                    succeeded: exit_code == Some(0),
                    stdout,
                    stderr,
                    timed_out: false,
                    truncated: stdout_truncated || stderr_truncated,
                }
            }
            Err(io_err) => self.report_failure(command, TerminalError::Spawn(io_err)),
        }
    }

    /// Convert a spawn failure or timeout into result data.
    fn report_failure(&self, command: &str, err: TerminalError) -> CommandOutput {
        tracing::warn!(command, "Command failed: {}", err);

        CommandOutput {
            command: command.to_string(),
            exit_code: None,
            succeeded: false,
            stdout: String::new(),
            stderr: err.to_string(),
            timed_out: matches!(err, TerminalError::Timeout(_)),
            truncated: false,
        }
    }
}

/// Decode bytes as lossy UTF-8, capped at `max_bytes` on a UTF-8 boundary
fn decode_capped(bytes: &[u8], max_bytes: usize) -> (String, bool) {
    if bytes.len() <= max_bytes {
        return (String::from_utf8_lossy(bytes).to_string(), false);
    }

    // Back up past continuation bytes so a multi-byte character straddling
    // the cap is dropped whole rather than decoded as U+FFFD.
    let mut end = max_bytes;
    while end > 0 && (bytes[end] & 0xC0) == 0x80 {
        end -= 1;
    }

    (String::from_utf8_lossy(&bytes[..end]).to_string(), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_executor(config: Config) -> (tempfile::TempDir, CommandExecutor) {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::resolve(dir.path().to_str().unwrap()).unwrap();
        let executor = CommandExecutor::new(&config, workspace);
        (dir, executor)
    }

    #[tokio::test]
    async fn test_echo_captures_stdout() {
        let (_dir, executor) = test_executor(Config::default());
        let output = executor.execute("echo hello", None).await;

        assert!(output.succeeded);
        assert_eq!(output.exit_code, Some(0));
        assert!(output.stdout.contains("hello"));
        assert!(!output.timed_out);
        assert!(!output.truncated);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_data_not_error() {
        let (_dir, executor) = test_executor(Config::default());
        let output = executor.execute("exit 7", None).await;

        assert!(!output.succeeded);
        assert_eq!(output.exit_code, Some(7));
    }

    #[tokio::test]
    async fn test_stderr_captured() {
        let (_dir, executor) = test_executor(Config::default());
        let output = executor.execute("echo oops >&2", None).await;

        assert!(output.succeeded);
        assert!(output.stderr.contains("oops"));
        assert!(output.stdout.is_empty());
    }

    #[tokio::test]
    async fn test_runs_in_workspace() {
        let (dir, executor) = test_executor(Config::default());
        let output = executor.execute("pwd", None).await;

        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(output.stdout.trim(), expected.to_str().unwrap());
    }

    #[tokio::test]
    async fn test_missing_executable_reports_in_result() {
        let (_dir, executor) = test_executor(Config::default());
        let output = executor
            .execute("/definitely/not/a/real/binary --flag", None)
            .await;

        assert!(!output.succeeded);
        assert!(!output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_spawn_failure_reports_in_result() {
        let mut config = Config::default();
        config.command.shell = "/nonexistent/shell".to_string();
        let (_dir, executor) = test_executor(config);

        let output = executor.execute("echo hello", None).await;

        assert!(!output.succeeded);
        assert_eq!(output.exit_code, None);
        assert!(output.stderr.contains("failed to spawn"));
    }

    #[tokio::test]
    async fn test_timeout_kills_process() {
        let (_dir, executor) = test_executor(Config::default());

        let start = std::time::Instant::now();
        let output = executor
            .execute("sleep 10", Some(Duration::from_secs(1)))
            .await;

        assert!(output.timed_out);
        assert!(!output.succeeded);
        assert_eq!(output.exit_code, None);
        assert!(output.stdout.is_empty());
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_env_overrides() {
        let mut config = Config::default();
        config
            .environment
            .set
            .insert("TERMINAL_MCP_TEST".to_string(), "marker".to_string());
        let (_dir, executor) = test_executor(config);

        let output = executor.execute("echo $TERMINAL_MCP_TEST", None).await;
        assert!(output.stdout.contains("marker"));
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let (_dir, executor) = test_executor(Config::default());

        let first = executor.execute("echo deterministic", None).await;
        let second = executor.execute("echo deterministic", None).await;
        assert_eq!(first.stdout, second.stdout);
    }

    #[tokio::test]
    async fn test_output_truncation() {
        let mut config = Config::default();
        config.limits.max_output_bytes = 16;
        let (_dir, executor) = test_executor(config);

        let output = executor
            .execute("printf 'aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa'", None)
            .await;

        assert!(output.truncated);
        assert_eq!(output.stdout.len(), 16);
        assert!(output.succeeded);
    }

    #[test]
    fn test_decode_capped_under_limit() {
        let (text, truncated) = decode_capped(b"short", 100);
        assert_eq!(text, "short");
        assert!(!truncated);
    }

    #[test]
    fn test_decode_capped_invalid_utf8_substituted() {
        let (text, truncated) = decode_capped(&[0x66, 0x6f, 0xff, 0x6f], 100);
        assert!(text.contains('\u{FFFD}'));
        assert!(!truncated);
    }

    #[test]
    fn test_decode_capped_keeps_multibyte_chars_whole() {
        // "abé" is four bytes; a cap of 3 falls inside the 'é'
        let (text, truncated) = decode_capped("ab\u{e9}".as_bytes(), 3);
        assert_eq!(text, "ab");
        assert!(truncated);
        assert!(!text.contains('\u{FFFD}'));
    }
}
