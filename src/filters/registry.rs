//! Keyed renderer registry
//!
//! Backs both the filter-adapter registry (looked up by [`FilterType`]) and
//! the game-card registry. Registration overwrites; the default entry is the
//! first key ever registered and never moves afterwards.
//!
//! [`FilterType`]: super::FilterType

use std::collections::HashMap;
use std::hash::Hash;

/// Anything stored in a [`Registry`] knows its own key
pub trait Keyed {
    type Key: Clone + Eq + Hash;

    fn key(&self) -> &Self::Key;
}

pub struct Registry<V: Keyed> {
    entries: HashMap<V::Key, V>,
    default_key: Option<V::Key>,
}

impl<V: Keyed> Default for Registry<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            default_key: None,
        }
    }
}

impl<V: Keyed> Registry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `value.key()`
    pub fn register(&mut self, value: V) {
        let key = value.key().clone();
        if self.default_key.is_none() {
            self.default_key = Some(key.clone());
        }
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &V::Key) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &V::Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Entry for the first key ever registered
    pub fn default_entry(&self) -> Option<&V> {
        self.default_key.as_ref().and_then(|key| self.entries.get(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &V::Key> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        key: String,
        version: u32,
    }

    impl Keyed for Entry {
        type Key = String;

        fn key(&self) -> &String {
            &self.key
        }
    }

    fn entry(key: &str, version: u32) -> Entry {
        Entry { key: key.to_string(), version }
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = Registry::new();
        registry.register(entry("genres", 1));
        registry.register(entry("genres", 2));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&"genres".to_string()).unwrap().version, 2);
    }

    #[test]
    fn test_unknown_key_not_found() {
        let mut registry = Registry::new();
        registry.register(entry("name", 1));

        assert!(registry.get(&"platforms".to_string()).is_none());
        assert!(registry.get(&String::new()).is_none());
    }

    #[test]
    fn test_default_is_first_registered() {
        let mut registry: Registry<Entry> = Registry::new();
        assert!(registry.default_entry().is_none());

        registry.register(entry("grid", 1));
        registry.register(entry("list", 1));
        assert_eq!(registry.default_entry().unwrap().key, "grid");

        // Re-registering the default replaces its value but keeps it default
        registry.register(entry("grid", 2));
        registry.register(entry("compact", 1));
        let default = registry.default_entry().unwrap();
        assert_eq!(default.key, "grid");
        assert_eq!(default.version, 2);
    }

    #[test]
    fn test_runtime_registration_visible() {
        let mut registry = Registry::new();
        registry.register(entry("name", 1));
        assert!(!registry.contains(&"custom".to_string()));

        registry.register(entry("custom", 1));
        assert!(registry.contains(&"custom".to_string()));
        assert_eq!(registry.get(&"custom".to_string()), Some(&entry("custom", 1)));
    }
}
