//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use creator_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::CreatorResult,
};
use tracing::debug;

use crate::builtin_templates::BUILTIN_TEMPLATES;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> CreatorResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates, replacing same-named entries.
    pub fn load_builtin(&self) -> CreatorResult<()> {
        for (name, text) in BUILTIN_TEMPLATES {
            self.insert(*name, *text)?;
        }
        debug!(count = BUILTIN_TEMPLATES.len(), "Built-in templates loaded");
        Ok(())
    }

    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) -> CreatorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), text.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted template names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .read()
            .map(|i| i.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl TemplateStore for InMemoryStore {
    fn load(&self, name: &str) -> CreatorResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creator_core::error::CreatorError;

    #[test]
    fn builtin_store_serves_catalog_templates() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), BUILTIN_TEMPLATES.len());
        assert!(
            store
                .load("simple/obr-template.xml")
                .unwrap()
                .contains("<capability")
        );
    }

    #[test]
    fn insert_overrides_a_builtin() {
        let store = InMemoryStore::with_builtin().unwrap();
        store.insert("resources/style.css", "body {}").unwrap();
        assert_eq!(store.load("resources/style.css").unwrap(), "body {}");
    }

    #[test]
    fn unknown_name_is_template_not_found() {
        let err = InMemoryStore::new().load("simple/nope").unwrap_err();
        assert!(matches!(
            err,
            CreatorError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }
}
