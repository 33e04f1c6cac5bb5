//! Resolver registry
//!
//! Maps resolver names to handlers, the way a host framework exposes its
//! variable-resolver table. Dispatch looks at the prefix before the first
//! `:` of a reference and hands the full reference to the matching
//! resolver, which owns all further parsing.

use crate::{ResolveError, ResolvedValue, VariableResolver};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for variable resolvers
///
/// Allows dynamic registration of resolvers by name. Hosts register the
/// providers they ship and dispatch every templated reference through
/// [`resolve`](ResolverRegistry::resolve).
///
/// # Example
///
/// ```ignore
/// use resolvar_secrets::ResolverRegistry;
///
/// let mut registry = ResolverRegistry::new();
/// registry.register(Arc::new(OnePasswordResolver::new()));
///
/// let value = registry.resolve("1password:vault=Dev:api-token").await?;
/// ```
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<&'static str, Arc<dyn VariableResolver>>,
}

impl ResolverRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Register a resolver
    ///
    /// The resolver's `resolver_name()` is used as the key. If a resolver
    /// with the same name already exists, it is replaced.
    pub fn register(&mut self, resolver: Arc<dyn VariableResolver>) {
        self.resolvers.insert(resolver.resolver_name(), resolver);
    }

    /// Get a resolver by name
    ///
    /// Returns `None` if no resolver is registered for the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn VariableResolver>> {
        self.resolvers.get(name).cloned()
    }

    /// Check if a resolver is registered for the given name
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    /// Get all registered resolver names
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.keys().copied().collect()
    }

    /// Resolve a reference using the resolver its prefix names
    ///
    /// The prefix is everything before the first `:`; a reference without
    /// a colon is treated as a bare resolver name. The full reference,
    /// prefix included, is passed through to the matched resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnsupportedResolver`] if no resolver is
    /// registered for the prefix, and otherwise whatever the resolver
    /// returns.
    pub async fn resolve(&self, reference: &str) -> Result<ResolvedValue, ResolveError> {
        let name = reference.split_once(':').map_or(reference, |(prefix, _)| prefix);

        let resolver = self
            .get(name)
            .ok_or_else(|| ResolveError::UnsupportedResolver {
                name: name.to_string(),
            })?;

        resolver.resolve(reference).await
    }

    /// Resolve many references concurrently
    ///
    /// Resolutions are independent, so they run concurrently and fail
    /// fast on the first error. Results keep the input order.
    ///
    /// # Errors
    ///
    /// Returns the first error any resolution produces.
    pub async fn resolve_all(
        &self,
        references: &[String],
    ) -> Result<Vec<ResolvedValue>, ResolveError> {
        use futures::future::try_join_all;

        try_join_all(references.iter().map(|reference| self.resolve(reference))).await
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("resolvers", &self.names())
            .finish()
    }
}
