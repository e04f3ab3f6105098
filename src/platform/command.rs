//! External command execution.
//!
//! Every helper here treats a missing executable as an ordinary outcome,
//! never as an error: callers decide which fallback comes next.

use std::process::{Command, Stdio};
use std::time::Duration;

/// Result of a single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The executable could not be found on `PATH`
    Missing,
    /// The command ran (or failed to spawn) but did not exit successfully
    Failed { stderr: String },
    /// The command exited with status 0
    Success { stdout: String, stderr: String },
}

impl CommandOutcome {
    /// Standard output of a successful run
    pub fn stdout(self) -> Option<String> {
        match self {
            CommandOutcome::Success { stdout, .. } => Some(stdout),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CommandOutcome::Missing)
    }
}

/// Whether `program` resolves to an executable
pub fn is_available(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Run `program` with `LANG=C` and capture both output streams
pub fn run(program: &str, args: &[&str]) -> CommandOutcome {
    if !is_available(program) {
        return CommandOutcome::Missing;
    }

    let output = Command::new(program)
        .args(args)
        .env("LANG", "C")
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if output.status.success() {
                CommandOutcome::Success { stdout, stderr }
            } else {
                CommandOutcome::Failed { stderr }
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CommandOutcome::Missing,
        Err(e) => CommandOutcome::Failed {
            stderr: e.to_string(),
        },
    }
}

/// Standard output of `program`, if it ran successfully
pub fn check_output(program: &str, args: &[&str]) -> Option<String> {
    run(program, args).stdout()
}

/// Like [`check_output`], but the child is killed once `timeout` elapses.
///
/// Works from a `spawn_blocking` worker of the loader runtime as well as
/// from a plain thread (a throwaway current-thread runtime is built then).
pub fn output_with_timeout(program: &str, args: &[&str], timeout: Duration) -> Option<String> {
    if !is_available(program) {
        return None;
    }

    let mut command = tokio::process::Command::new(program);
    command
        .args(args)
        .env("LANG", "C")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let task = async move { tokio::time::timeout(timeout, command.output()).await };

    let result = match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle.block_on(task),
        Err(_) => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .ok()?
            .block_on(task),
    };

    match result {
        Ok(Ok(output)) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(Ok(_)) | Ok(Err(_)) => None,
        Err(_) => {
            log::debug!("`{}` timed out after {:?}", program, timeout);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let outcome = run("surely-not-an-installed-program-4f1c", &[]);
        assert!(outcome.is_missing());
        assert_eq!(outcome.stdout(), None);
    }

    #[test]
    fn test_missing_program_with_timeout() {
        assert_eq!(
            output_with_timeout(
                "surely-not-an-installed-program-4f1c",
                &[],
                Duration::from_millis(50)
            ),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_success_captures_stdout() {
        let outcome = run("sh", &["-c", "echo hello"]);
        assert_eq!(outcome.stdout().as_deref(), Some("hello\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_captures_stderr() {
        let outcome = run("sh", &["-c", "echo oops >&2; exit 3"]);
        assert_eq!(
            outcome,
            CommandOutcome::Failed {
                stderr: "oops\n".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_slow_child() {
        let started = std::time::Instant::now();
        let output = output_with_timeout("sleep", &["5"], Duration::from_millis(100));
        assert_eq!(output, None);
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
