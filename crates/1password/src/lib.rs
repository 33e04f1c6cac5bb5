//! 1Password integration for resolvar
//!
//! Expands `1password:` references during configuration processing by
//! invoking the `op` CLI. Currently supports:
//! - Item, document, and TOTP lookups via the [`secrets`] module

pub mod secrets;

// Re-export main types for convenience
pub use secrets::{Invocation, OnePasswordQuery, OnePasswordResolver, OptionValue, RequestMode};
