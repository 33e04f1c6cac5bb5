//! 1Password secret resolution
//!
//! A reference such as `1password:'vault=Dev:raw:api token'` is parsed
//! into an option mapping plus an item identifier ([`OnePasswordQuery`]),
//! turned into the exact `op` argument vector ([`Invocation`]), and run
//! through the injected command executor by [`OnePasswordResolver`].

mod invocation;
mod query;
mod resolver;

pub use invocation::{Invocation, RequestMode};
pub use query::{OnePasswordQuery, OptionValue};
pub use resolver::OnePasswordResolver;
