//! Command execution capability
//!
//! External tools are reached through the narrow [`CommandExecutor`]
//! capability so parsing and invocation building stay pure and testable
//! without spawning real processes. [`SystemExecutor`] is the production
//! implementation; tests inject doubles.

use async_trait::async_trait;
use tokio::process::Command;

/// Captured output of one external command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Full standard-output text
    pub stdout: String,
    /// Full standard-error text
    pub stderr: String,
}

/// Trait for executing external commands
///
/// The capability is deliberately minimal: program and argument vector in,
/// exit status plus captured streams out. Both streams are read to
/// completion before the call resolves; the caller owns the process for
/// the duration of the call.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute `program` with `args` and capture its output
    async fn execute(&self, program: &str, args: &[String]) -> std::io::Result<ExecOutput>;
}

/// Production executor that spawns real processes
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    /// Create a new system executor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for SystemExecutor {
    async fn execute(&self, program: &str, args: &[String]) -> std::io::Result<ExecOutput> {
        tracing::debug!(program, ?args, "executing external command");

        let output = Command::new(program).args(args).output().await?;

        Ok(ExecOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
