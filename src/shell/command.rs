//! Shell command execution.

use crate::error::{BasecampError, Result};
use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Execute a shell command.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let shell_flag = shell_flag();

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag);
    cmd.arg(command);

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|_| BasecampError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Execute a command and collect output without echoing anything.
pub fn execute_quiet(command: &str) -> Result<CommandResult> {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    execute(command, &options)
}

/// Execute a command and return success/failure.
///
/// This is the probe primitive: "is X installed" reduces to whether the
/// manager's listing command exits zero.
pub fn probe(command: &str) -> bool {
    execute_quiet(command).map(|r| r.success).unwrap_or(false)
}

/// Turn a [`CommandResult`] into an error if the command failed.
///
/// Captured stderr is replayed to our own stderr first so the user sees
/// exactly what the external tool printed, with no extra wrapping.
pub fn ensure_success(command: &str, result: &CommandResult) -> Result<()> {
    if result.success {
        return Ok(());
    }

    if !result.stderr.is_empty() {
        let mut err = std::io::stderr();
        let _ = err.write_all(result.stderr.as_bytes());
        let _ = err.flush();
    }

    Err(BasecampError::CommandFailed {
        command: command.to_string(),
        code: result.exit_code,
    })
}

/// Detect the current shell.
fn detect_shell() -> String {
    std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lic` (interactive login shell) so that the user's full shell
/// environment is available. Homebrew and the language toolchains are
/// typically activated in `.zshrc`/`.zprofile`; without `-lic` they are
/// not on PATH and every probe reports "absent".
///
/// In CI environments, uses `-lc` (login, non-interactive) to avoid
/// `bash: cannot set terminal process group` errors caused by `-i`
/// trying to set up job control without a TTY.
fn shell_flag() -> &'static str {
    if super::is_ci() {
        "-lc"
    } else {
        "-lic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        let result = execute("echo hello", &options).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        let result = execute("exit 1", &options).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let result = execute("echo $MY_VAR", &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn execute_quiet_captures_silently() {
        let result = execute_quiet("echo hello").unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn probe_returns_bool() {
        assert!(probe("exit 0"));
        assert!(!probe("exit 1"));
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute_quiet("echo fast").unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn ensure_success_passes_on_zero_exit() {
        let result = execute_quiet("echo ok").unwrap();
        assert!(ensure_success("echo ok", &result).is_ok());
    }

    #[test]
    fn ensure_success_errors_on_nonzero_exit() {
        let result = execute_quiet("exit 3").unwrap();
        let err = ensure_success("exit 3", &result).unwrap_err();
        match err {
            BasecampError::CommandFailed { command, code } => {
                assert_eq!(command, "exit 3");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shell_flag_uses_non_interactive_in_ci() {
        std::env::set_var("CI", "true");
        let flag = shell_flag();
        std::env::remove_var("CI");
        assert_eq!(flag, "-lc");
    }
}
