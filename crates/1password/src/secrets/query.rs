//! Query parsing for `1password:` references
//!
//! The query body is a colon-delimited mini-grammar:
//! `[option ':']* item`, where an option is either a bare flag or a
//! `key=value` pair and `\:` escapes a literal colon. The last segment is
//! always the item identifier. Parsing is lenient on purpose: it never
//! fails, and unrecognized keys are stored but never consulted.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Literal prefix naming this resolver in a templated reference
const RESOLVER_PREFIX: &str = "1password:";

// One segment is a run of escaped characters or non-delimiter characters,
// so an escaped colon never causes a split.
#[allow(clippy::expect_used)]
static SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\.|[^:])+").expect("segment pattern is valid"));

/// Value of a single query option
///
/// Bare flags parse to `Flag(true)`; `key=value` pairs keep their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Bare flag, or a seeded boolean default
    Flag(bool),
    /// Text from the right-hand side of `key=value`
    Text(String),
}

impl OptionValue {
    /// Whether this option counts as set when branching on it
    ///
    /// `Flag(true)` and non-empty text are set; `Flag(false)` and empty
    /// text are not.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A parsed `1password:` query: option mapping plus item identifier
///
/// The mapping is pre-seeded with `fields = "username,password"` and
/// `raw = false` before parsed options are merged in, so both keys are
/// always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnePasswordQuery {
    options: HashMap<String, OptionValue>,
    item: String,
}

impl OnePasswordQuery {
    /// Parse a reference into options and item.
    ///
    /// Accepts the full reference (`1password:` prefix included) or an
    /// already-stripped body; single quotes wrapping the body are removed
    /// before segmentation. Parsing never fails: a missing item yields an
    /// empty identifier, options default when absent, and duplicate keys
    /// are resolved by letting later segments win.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let body = reference.strip_prefix(RESOLVER_PREFIX).unwrap_or(reference);
        let body = body.strip_prefix('\'').unwrap_or(body);
        let body = body.strip_suffix('\'').unwrap_or(body);

        // Split at `:` unless escaped, then unescape after splitting
        let mut segments: Vec<String> = SEGMENT_RE
            .find_iter(body)
            .map(|segment| segment.as_str().replace("\\:", ":"))
            .collect();

        let item = segments.pop().unwrap_or_default();

        let mut options = HashMap::from([
            (
                "fields".to_string(),
                OptionValue::Text("username,password".to_string()),
            ),
            ("raw".to_string(), OptionValue::Flag(false)),
        ]);
        options.extend(parse_kv(&segments));

        tracing::trace!(item = %item, option_segments = segments.len(), "parsed 1password query");

        Self { options, item }
    }

    /// The item identifier, always the last segment of the query
    #[must_use]
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Look up an option by exact, case-sensitive key
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }
}

/// Convert option segments into key/value entries.
///
/// The first `=` splits key from value; everything after it, further `=`
/// characters included, is the value. A segment without `=` becomes a bare
/// flag. Later duplicate keys overwrite earlier ones.
fn parse_kv(segments: &[String]) -> HashMap<String, OptionValue> {
    segments
        .iter()
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.to_string(), OptionValue::Text(value.to_string())),
            None => (segment.clone(), OptionValue::Flag(true)),
        })
        .collect()
}
