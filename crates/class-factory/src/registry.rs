//! Template registry and factory configuration
//!
//! A template is a named, reusable dependency bundle; any dependency name
//! matching a registered template is expanded into that template's own list
//! during resolution. The registry is populated once at startup (usually via
//! [`FactoryConfig`]) and read-only thereafter.

use crate::class::GenericClass;
use serde::{Deserialize, Serialize};
use std::collections::{hash_map::Entry, BTreeMap, HashMap};
use std::path::PathBuf;

/// Registry of named dependency bundles
///
/// Keys are unique; re-registering a name overwrites the prior entry.
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, GenericClass>,
}

impl TemplateRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a template under a name, overwriting any prior entry
    ///
    /// Constructs a [`GenericClass`] from the dependency names (which
    /// deduplicates them) and returns a reference to the stored value.
    pub fn set<I, S>(&mut self, name: impl Into<String>, dependencies: I) -> &GenericClass
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = GenericClass::new(dependencies);
        match self.templates.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(template);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(template),
        }
    }

    /// Look up a template by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GenericClass> {
        self.templates.get(name)
    }

    /// Check if a template is registered under the name
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// List all registered template names
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered templates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Startup configuration for a [`ClassFactory`](crate::ClassFactory)
///
/// Mirrors the host's config file: scratch directory, materialization mode,
/// and the template bundles to pre-register. An explicitly constructed value
/// passed into the factory, never ambient process-wide state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Scratch directory for cached stubs; host temp dir when unset
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,

    /// Evaluate rendered source in-process instead of loading the cache file
    #[serde(default)]
    pub use_eval: bool,

    /// Template name → dependency list, registered in order at startup
    #[serde(default)]
    pub templates: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_new_empty() {
        let registry = TemplateRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("anything").is_none());
    }

    #[test]
    fn registry_set_and_get() {
        let mut registry = TemplateRegistry::new();
        let stored = registry.set("loggable", ["LoggerAwareInterface", "LoggerAwareTrait"]);
        assert_eq!(stored.dependencies().count(), 2);

        assert!(registry.contains("loggable"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_set_overwrites() {
        let mut registry = TemplateRegistry::new();
        registry.set("bundle", ["A", "B"]);
        registry.set("bundle", ["C"]);

        let stored = registry.get("bundle").unwrap();
        let deps: Vec<&str> = stored.dependencies().collect();
        assert_eq!(deps, ["C"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_names() {
        let mut registry = TemplateRegistry::new();
        registry.set("a", ["X"]);
        registry.set("b", ["Y"]);

        let names = registry.names();
        assert!(names.contains(&"a"));
        assert!(names.contains(&"b"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: FactoryConfig = serde_json::from_str("{}").unwrap();
        assert!(config.temp_dir.is_none());
        assert!(!config.use_eval);
        assert!(config.templates.is_empty());
    }

    #[test]
    fn config_deserializes_templates() {
        let json = r#"{
            "temp_dir": "/tmp/stubs",
            "use_eval": true,
            "templates": { "loggable": ["LoggerAwareInterface", "LoggerAwareTrait"] }
        }"#;
        let config: FactoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.temp_dir.as_deref(), Some(std::path::Path::new("/tmp/stubs")));
        assert!(config.use_eval);
        assert_eq!(
            config.templates["loggable"],
            ["LoggerAwareInterface", "LoggerAwareTrait"]
        );
    }
}
