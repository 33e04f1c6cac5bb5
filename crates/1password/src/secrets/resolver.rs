//! 1Password secret resolver backed by the `op` CLI

use super::invocation::{Invocation, RequestMode};
use super::query::OnePasswordQuery;
use async_trait::async_trait;
use resolvar_secrets::{
    CommandExecutor, ResolveError, ResolvedValue, SystemExecutor, VariableResolver,
};
use std::sync::Arc;

/// Name of the 1Password CLI executable
const OP_PROGRAM: &str = "op";

/// Fixed prefix tagging tool failures from this subsystem
const ERROR_TAG: &str = "1password";

/// Resolves `1password:` references by invoking the `op` CLI
///
/// The query names an item plus options controlling how it is fetched
/// (`vault`, `account`, `fields`, `raw`, `document`, `totp`). Item lookups
/// decode the CLI's JSON output into a structured value; document and TOTP
/// lookups return the payload verbatim. Command execution is injected so
/// the resolver tests without a real `op` binary.
pub struct OnePasswordResolver {
    executor: Arc<dyn CommandExecutor>,
}

impl OnePasswordResolver {
    /// Create a resolver that spawns the real `op` CLI
    #[must_use]
    pub fn new() -> Self {
        Self::with_executor(Arc::new(SystemExecutor::new()))
    }

    /// Create a resolver with a custom command executor
    #[must_use]
    pub fn with_executor(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Run one prepared invocation to completion and return its stdout
    async fn fetch(&self, invocation: &Invocation) -> Result<String, ResolveError> {
        tracing::debug!(args = ?invocation.args(), "invoking op");

        let output = self
            .executor
            .execute(OP_PROGRAM, invocation.args())
            .await
            .map_err(|source| ResolveError::Spawn {
                tool: OP_PROGRAM,
                source,
            })?;

        if !output.success {
            return Err(ResolveError::ToolFailed {
                tool: ERROR_TAG,
                message: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl Default for OnePasswordResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OnePasswordResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnePasswordResolver").finish_non_exhaustive()
    }
}

#[async_trait]
impl VariableResolver for OnePasswordResolver {
    fn resolver_name(&self) -> &'static str {
        "1password"
    }

    async fn resolve(&self, reference: &str) -> Result<ResolvedValue, ResolveError> {
        let query = OnePasswordQuery::parse(reference);
        let invocation = query.invocation();
        let stdout = self.fetch(&invocation).await?;

        match invocation.mode() {
            RequestMode::Item => Ok(ResolvedValue::Json(serde_json::from_str(&stdout)?)),
            RequestMode::Document | RequestMode::Totp => Ok(ResolvedValue::Text(stdout)),
        }
    }
}
