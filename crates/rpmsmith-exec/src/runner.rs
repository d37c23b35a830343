//! Command builder and runner.

use crate::errors::ToolError;
use std::ffi::OsStr;
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Default time budget for a single tool invocation.
///
/// Signing a large package over a slow GPG agent can legitimately take
/// minutes; ten is far past anything but a hang.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(600);

/// Captured output of a completed tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    /// Standard output, decoded as UTF-8.
    pub stdout: String,
    /// Standard error, decoded as UTF-8.
    pub stderr: String,
}

/// Builder for one synchronous invocation of an external tool.
///
/// The tool name is kept separate from the arguments so errors can name the
/// tool without reparsing the command line.
///
/// # Example
///
/// ```no_run
/// use rpmsmith_exec::ToolCommand;
///
/// ToolCommand::new("rpmkeys")
///     .arg("--dbpath")
///     .arg("/tmp/scoped-db")
///     .args(["--import", "archive-keyring.gpg"])
///     .run()?;
/// # Ok::<(), rpmsmith_exec::ToolError>(())
/// ```
pub struct ToolCommand {
    tool: &'static str,
    cmd: Command,
    timeout: Option<Duration>,
}

impl ToolCommand {
    /// Creates a command for the named tool with the default time budget.
    pub fn new(tool: &'static str) -> Self {
        let mut cmd = Command::new(tool);
        // Output parsing depends on untranslated tool messages.
        cmd.env("LC_ALL", "C");
        Self {
            tool,
            cmd,
            timeout: Some(DEFAULT_TOOL_TIMEOUT),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.cmd.args(args);
        self
    }

    /// Overrides the time budget. `None` waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the tool to completion and captures its output.
    ///
    /// # Errors
    ///
    /// - [`ToolError::Io`] if the process cannot be spawned or waited on
    /// - [`ToolError::Timeout`] if the budget expires (the child is killed)
    /// - [`ToolError::Failed`] on a nonzero exit status
    /// - [`ToolError::InvalidUtf8`] if stdout or stderr is not UTF-8
    pub fn run(mut self) -> Result<ToolOutput, ToolError> {
        let tool = self.tool;
        tracing::debug!(tool, cmd = ?self.cmd, "invoking external tool");

        self.cmd.stdin(Stdio::null());
        self.cmd.stdout(Stdio::piped());
        self.cmd.stderr(Stdio::piped());

        let mut child = self
            .cmd
            .spawn()
            .map_err(|source| ToolError::Io { tool, source })?;

        let status = match self.timeout {
            None => child.wait().map_err(|source| ToolError::Io { tool, source })?,
            Some(limit) => {
                let deadline = Instant::now() + limit;
                loop {
                    match child.try_wait().map_err(|source| ToolError::Io { tool, source })? {
                        Some(status) => break status,
                        None if Instant::now() >= deadline => {
                            let _ = child.kill();
                            let _ = child.wait();
                            return Err(ToolError::Timeout {
                                tool,
                                limit_secs: limit.as_secs(),
                            });
                        }
                        None => std::thread::sleep(Duration::from_millis(25)),
                    }
                }
            }
        };

        // The tools invoked here emit at most a few lines, well under pipe
        // capacity, so draining after exit cannot deadlock.
        let stdout = drain(tool, child.stdout.take())?;
        let stderr = drain(tool, child.stderr.take())?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            tracing::debug!(tool, code, "external tool failed");
            return Err(ToolError::Failed {
                tool,
                status: code,
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }
}

fn drain<R: Read>(tool: &'static str, pipe: Option<R>) -> Result<String, ToolError> {
    let mut bytes = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut bytes)
            .map_err(|source| ToolError::Io { tool, source })?;
    }
    String::from_utf8(bytes).map_err(|_| ToolError::InvalidUtf8 { tool })
}
