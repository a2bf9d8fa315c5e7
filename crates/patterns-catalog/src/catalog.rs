//! Catalog metadata and the built-in registry

use crate::patterns::{
    adapter, command, composite, decorator, factory, observer, proxy, singleton, state, strategy,
};
use patterns_core::{CatalogError, ExampleFailure, Lines, Registry};

/// Signature shared by every demonstration
pub type ProduceFn = fn() -> Result<Lines, ExampleFailure>;

/// Static description of one catalog entry
#[derive(Debug, Clone, Copy)]
pub struct PatternInfo {
    /// Registry name
    pub name: &'static str,
    /// Pattern title
    pub title: &'static str,
    /// One-line summary
    pub summary: &'static str,
    /// Demonstration entry point
    pub produce: ProduceFn,
    /// Documented output
    pub expected: &'static [&'static str],
}

/// All patterns in canonical order
pub static CATALOG: [PatternInfo; 10] = [
    PatternInfo {
        name: "singleton",
        title: "Singleton",
        summary: "One shared instance with an init-once lifecycle",
        produce: singleton::produce,
        expected: singleton::EXPECTED,
    },
    PatternInfo {
        name: "factory",
        title: "Factory",
        summary: "Build a concrete type from a kind tag",
        produce: factory::produce,
        expected: factory::EXPECTED,
    },
    PatternInfo {
        name: "observer",
        title: "Observer",
        summary: "A subject notifies subscribers in order",
        produce: observer::produce,
        expected: observer::EXPECTED,
    },
    PatternInfo {
        name: "strategy",
        title: "Strategy",
        summary: "Swap the algorithm a context delegates to",
        produce: strategy::produce,
        expected: strategy::EXPECTED,
    },
    PatternInfo {
        name: "command",
        title: "Command",
        summary: "Requests bound to buttons as objects",
        produce: command::produce,
        expected: command::EXPECTED,
    },
    PatternInfo {
        name: "decorator",
        title: "Decorator",
        summary: "Wrap an object to extend its behavior",
        produce: decorator::produce,
        expected: decorator::EXPECTED,
    },
    PatternInfo {
        name: "adapter",
        title: "Adapter",
        summary: "Present an incompatible interface as the expected one",
        produce: adapter::produce,
        expected: adapter::EXPECTED,
    },
    PatternInfo {
        name: "proxy",
        title: "Proxy",
        summary: "Defer loading a costly object until first use",
        produce: proxy::produce,
        expected: proxy::EXPECTED,
    },
    PatternInfo {
        name: "composite",
        title: "Composite",
        summary: "Treat leaves and groups uniformly in a tree",
        produce: composite::produce,
        expected: composite::EXPECTED,
    },
    PatternInfo {
        name: "state",
        title: "State",
        summary: "Gumball machine as an explicit finite-state machine",
        produce: state::produce,
        expected: state::EXPECTED,
    },
];

/// Look up catalog metadata by registry name
#[must_use]
pub fn find(name: &str) -> Option<&'static PatternInfo> {
    CATALOG.iter().find(|info| info.name == name)
}

/// Documented output for `name`
#[must_use]
pub fn expected_lines(name: &str) -> Option<&'static [&'static str]> {
    find(name).map(|info| info.expected)
}

/// Registry holding every catalog pattern in canonical order
///
/// # Errors
/// [`CatalogError::DuplicateName`] if the catalog lists a name twice.
pub fn builtin_registry() -> Result<Registry, CatalogError> {
    let mut registry = Registry::new();
    for info in &CATALOG {
        registry.register(info.name, info.produce)?;
    }
    tracing::debug!("Built-in registry holds {} patterns", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|info| info.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("proxy").map(|info| info.title), Some("Proxy"));
        assert!(find("visitor").is_none());
    }

    #[test]
    fn expected_lines_lookup() {
        assert_eq!(expected_lines("observer"), Some(&["Click me", "Press me"][..]));
    }

    #[test]
    fn builtin_registry_order() {
        let registry = builtin_registry().unwrap();
        let names: Vec<_> = CATALOG.iter().map(|info| info.name).collect();
        assert_eq!(registry.list_names(), names);
    }
}
