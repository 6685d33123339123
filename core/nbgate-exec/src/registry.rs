//! Snippet type → adapter resolution.

use crate::{ExecError, ExecResult, ExecutionAdapter, TextAdapter};
use nbgate_model::Snippet;
use nbgate_types::Requester;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builds an adapter acting on behalf of one requester.
pub type AdapterFactory = Arc<dyn Fn(&Requester) -> Arc<dyn ExecutionAdapter> + Send + Sync>;

/// Maps snippet type tags to adapter factories.
///
/// The registry is filled once at startup and shared read-only between
/// request handlers.
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    factories: HashMap<String, AdapterFactory>,
}

impl AdapterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the adapters that need no external backend.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "text",
            Arc::new(|_: &Requester| Arc::new(TextAdapter) as Arc<dyn ExecutionAdapter>),
        );
        registry
    }

    /// Binds `type_tag` to `factory`, replacing any earlier binding.
    pub fn register(&mut self, type_tag: impl Into<String>, factory: AdapterFactory) {
        let type_tag = type_tag.into();
        if self.factories.insert(type_tag.clone(), factory).is_some() {
            warn!(backend = %type_tag, "Execution backend re-registered, replacing previous adapter");
        } else {
            info!(backend = %type_tag, "Execution backend registered");
        }
    }

    /// Binds every tag in `type_tags` to the same factory.
    pub fn register_all(&mut self, type_tags: &[&str], factory: AdapterFactory) {
        for tag in type_tags {
            self.register(*tag, Arc::clone(&factory));
        }
    }

    /// Resolves the adapter for `snippet`'s type, built for `requester`.
    pub fn resolve(
        &self,
        requester: &Requester,
        snippet: &Snippet,
    ) -> ExecResult<Arc<dyn ExecutionAdapter>> {
        let type_tag = snippet.snippet_type().ok_or(ExecError::MissingSnippetType)?;
        let factory = self
            .factories
            .get(type_tag)
            .ok_or_else(|| ExecError::UnknownBackend(type_tag.to_string()))?;
        debug!(backend = type_tag, user = %requester, "Resolved execution backend");
        Ok(factory(requester))
    }

    /// Registered type tags, sorted.
    pub fn backends(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}
