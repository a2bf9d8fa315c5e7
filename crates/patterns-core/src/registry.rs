//! Example registry
//!
//! Provides [`Registry`] for registering and looking up examples by name.

use crate::error::CatalogError;
use crate::example::Example;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Insertion-ordered registry of named examples
///
/// Populated once at startup and read-only afterwards. Names are unique;
/// iteration follows registration order.
#[derive(Default)]
pub struct Registry {
    entries: IndexMap<String, Box<dyn Example>>,
}

impl Registry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register an example under `name`
    ///
    /// # Errors
    /// [`CatalogError::DuplicateName`] if `name` is taken. The existing
    /// entry is kept as is.
    pub fn register<E>(&mut self, name: impl Into<String>, example: E) -> Result<(), CatalogError>
    where
        E: Example + 'static,
    {
        match self.entries.entry(name.into()) {
            Entry::Occupied(slot) => {
                tracing::error!("Example '{}' registered twice", slot.key());
                Err(CatalogError::DuplicateName(slot.key().clone()))
            }
            Entry::Vacant(slot) => {
                tracing::debug!("Registered example '{}'", slot.key());
                slot.insert(Box::new(example));
                Ok(())
            }
        }
    }

    /// Look up an example
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&dyn Example, CatalogError> {
        self.entries
            .get(name)
            .map(|example| example.as_ref())
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Check if example exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in insertion order
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Get number of registered examples
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, example)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Example)> {
        self.entries
            .iter()
            .map(|(name, example)| (name.as_str(), example.as_ref()))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.list_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExampleFailure;
    use crate::example::{lines, Lines};

    fn one() -> Result<Lines, ExampleFailure> {
        Ok(lines(["one"]))
    }

    fn two() -> Result<Lines, ExampleFailure> {
        Ok(lines(["two"]))
    }

    #[test]
    fn registry_new_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list_names().is_empty());
    }

    #[test]
    fn registry_register() {
        let mut registry = Registry::new();
        registry.register("one", one).unwrap();
        assert!(registry.contains("one"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.register("zeta", one).unwrap();
        registry.register("alpha", two).unwrap();
        registry.register("mid", one).unwrap();
        assert_eq!(registry.list_names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn registry_duplicate_keeps_original() {
        let mut registry = Registry::new();
        registry.register("x", one).unwrap();

        let err = registry.register("x", two).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(ref n) if n == "x"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x").unwrap().produce().unwrap(), vec!["one"]);
    }

    #[test]
    fn registry_get_missing() {
        let registry = Registry::new();
        let err = registry.get("ghost").err().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn registry_iter_matches_names() {
        let mut registry = Registry::new();
        registry.register("one", one).unwrap();
        registry.register("two", two).unwrap();

        let produced: Vec<_> = registry
            .iter()
            .map(|(name, ex)| (name, ex.produce().unwrap()))
            .collect();
        assert_eq!(
            produced,
            vec![("one", lines(["one"])), ("two", lines(["two"]))]
        );
    }

    #[test]
    fn registry_debug_lists_names() {
        let mut registry = Registry::new();
        registry.register("one", one).unwrap();
        assert_eq!(format!("{registry:?}"), r#"Registry { names: ["one"] }"#);
    }
}
