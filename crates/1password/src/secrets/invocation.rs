//! Invocation building for the `op` CLI
//!
//! Turns a parsed query into the exact ordered argument vector the tool
//! expects. Flag order is part of the observable contract: format/fields
//! first (item mode only), then `--vault`, then `--account`, regardless of
//! the order options were written in the query.

use super::query::{OnePasswordQuery, OptionValue};

/// How the payload of an invocation is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Structured item lookup; stdout is JSON
    Item,
    /// Document download; stdout passes through verbatim
    Document,
    /// One-time password; stdout passes through verbatim
    Totp,
}

/// One prepared `op` invocation: request mode plus argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    mode: RequestMode,
    args: Vec<String>,
}

impl OnePasswordQuery {
    /// Build the `op` argument vector for this query
    #[must_use]
    pub fn invocation(&self) -> Invocation {
        Invocation::build(self)
    }
}

impl Invocation {
    /// Build the argument vector for a parsed query
    pub(crate) fn build(query: &OnePasswordQuery) -> Self {
        let is_set = |key: &str| query.option(key).is_some_and(OptionValue::is_set);
        let item = query.item().to_string();

        let (mode, mut args) = if is_set("document") {
            (
                RequestMode::Document,
                vec!["get".to_string(), "document".to_string(), item],
            )
        } else if is_set("totp") {
            (
                RequestMode::Totp,
                vec!["get".to_string(), "totp".to_string(), item],
            )
        } else {
            let mut args = vec![
                "get".to_string(),
                "item".to_string(),
                item,
                "--format".to_string(),
                "JSON".to_string(),
            ];
            // --fields applies only while `raw` is still the seeded default
            if query.option("raw") == Some(&OptionValue::Flag(false)) {
                args.push("--fields".to_string());
                args.push(
                    query
                        .option("fields")
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                );
            }
            (RequestMode::Item, args)
        };

        for key in ["vault", "account"] {
            if let Some(value) = query.option(key)
                && value.is_set()
            {
                args.push(format!("--{key}"));
                args.push(value.to_string());
            }
        }

        Self { mode, args }
    }

    /// The decode mode this invocation was built for
    #[must_use]
    pub const fn mode(&self) -> RequestMode {
        self.mode
    }

    /// The ordered argument vector
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume the invocation, yielding the argument vector
    #[must_use]
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
