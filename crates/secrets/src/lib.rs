//! Variable Resolution for resolvar
//!
//! Provides a unified interface for expanding templated configuration
//! references (`<resolver>:<query>`) into concrete values during
//! configuration processing. Providers live in separate crates (e.g.
//! `resolvar-1password`) and register with the [`ResolverRegistry`]; the
//! shared surface here is deliberately small: a resolver trait, a
//! decoded-value type, the error taxonomy, and the command-execution
//! capability providers use to reach external tools.
//!
//! # Resolution flow
//!
//! ```ignore
//! use resolvar_secrets::ResolverRegistry;
//!
//! let mut registry = ResolverRegistry::new();
//! registry.register(Arc::new(OnePasswordResolver::new()));
//!
//! let value = registry.resolve("1password:'vault=Dev:api token'").await?;
//! ```
//!
//! Every resolution is request-scoped: parse, invoke, decode, return.
//! Nothing persists across calls and there is no retry, timeout, or
//! caching layer.

mod exec;
mod registry;

pub use exec::{CommandExecutor, ExecOutput, SystemExecutor};
pub use registry::ResolverRegistry;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Error types for variable resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// External tool exited with failure
    #[error("{tool}: {message}")]
    ToolFailed {
        /// Fixed prefix identifying the originating subsystem
        tool: &'static str,
        /// Trimmed error-stream text from the tool
        message: String,
    },

    /// The external executable could not be launched at all
    #[error("failed to execute {tool}: {source}")]
    Spawn {
        /// Name of the executable that failed to launch
        tool: &'static str,
        /// Underlying io error from the spawn attempt
        #[source]
        source: std::io::Error,
    },

    /// Tool output could not be decoded as JSON
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// No resolver registered for the requested name
    #[error("unsupported resolver: {name}")]
    UnsupportedResolver {
        /// The resolver name that was requested
        name: String,
    },
}

/// A value produced by a resolver
///
/// Item lookups decode the tool's JSON output into a structured value;
/// document and TOTP lookups pass their payload through verbatim. The
/// untagged serialization lets hosts splice either shape straight back
/// into the configuration tree they are populating.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// Structured value decoded from the tool's JSON output
    Json(serde_json::Value),
    /// Opaque payload returned verbatim
    Text(String),
}

impl ResolvedValue {
    /// View the value as an opaque payload, if it is one
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// View the value as decoded JSON, if it is structured
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Trait for resolving templated references.
///
/// Implementors receive the full reference string, prefix included, and
/// own its parsing end to end. Resolutions are independent of each other
/// and safe to run concurrently; implementations must not keep state
/// across calls.
#[async_trait]
pub trait VariableResolver: Send + Sync {
    /// Name used to address this resolver in a templated reference.
    ///
    /// Examples: `"1password"`
    fn resolver_name(&self) -> &'static str;

    /// Resolve a reference to its concrete value.
    async fn resolve(&self, reference: &str) -> Result<ResolvedValue, ResolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_failed_display() {
        let err = ResolveError::ToolFailed {
            tool: "1password",
            message: "Not logged in".to_string(),
        };
        assert_eq!(err.to_string(), "1password: Not logged in");
    }

    #[test]
    fn test_spawn_display() {
        let err = ResolveError::Spawn {
            tool: "op",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("op"));

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }

    #[test]
    fn test_decode_error_passes_through() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = decode.to_string();

        let err = ResolveError::from(decode);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_unsupported_resolver_display() {
        let err = ResolveError::UnsupportedResolver {
            name: "vault".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported resolver: vault");
    }

    #[test]
    fn test_error_debug() {
        let err = ResolveError::ToolFailed {
            tool: "1password",
            message: "boom".to_string(),
        };
        let debug = format!("{err:?}");
        assert!(debug.contains("ToolFailed"));
    }

    #[test]
    fn test_resolved_value_accessors() {
        let json = ResolvedValue::Json(json!({"username": "test"}));
        assert!(json.as_json().is_some());
        assert!(json.as_text().is_none());

        let text = ResolvedValue::Text("123456".to_string());
        assert_eq!(text.as_text(), Some("123456"));
        assert!(text.as_json().is_none());
    }

    #[test]
    fn test_resolved_value_serializes_untagged() {
        let json = ResolvedValue::Json(json!({"user": "test"}));
        assert_eq!(
            serde_json::to_string(&json).unwrap(),
            r#"{"user":"test"}"#
        );

        let text = ResolvedValue::Text("123456".to_string());
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"123456\"");
    }

    #[test]
    fn test_resolved_value_equality() {
        let a = ResolvedValue::Text("x".to_string());
        let b = ResolvedValue::Text("x".to_string());
        let c = ResolvedValue::Json(json!("x"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
