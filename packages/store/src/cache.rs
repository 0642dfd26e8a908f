//! # Typed query cache
//!
//! A small keyed store for request results. The original coordination
//! mechanism between independent hooks was a set of string literals
//! scattered across call sites; here the keys are a closed enum so every
//! invalidation edge is visible in one place:
//!
//! | Key | Set by | Invalidated by |
//! |-----|--------|----------------|
//! | [`QueryKey::Session`] | login / register / session derivation | logout |
//! | [`QueryKey::Tasks`] | task list fetch | any task mutation, logout |
//! | [`QueryKey::Students`] | student list fetch | any student mutation, logout |
//!
//! Values are stored as `serde_json::Value` and read back through serde, so
//! the cache itself stays type-erased while call sites stay typed.
//! Invalidation discards the entry; the next read refetches from the
//! backend. There is no optimistic merge anywhere — mutations wait for
//! confirmation, then invalidate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The closed set of cacheable query results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Session,
    Tasks,
    Students,
}

/// Shared keyed store for request results.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, serde_json::Value>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a cached value, if present and deserializable as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        let value = self.entries.lock().unwrap().get(&key).cloned()?;
        serde_json::from_value(value).ok()
    }

    /// Store a value under a key, replacing any previous entry.
    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T) {
        if let Ok(json) = serde_json::to_value(value) {
            self.entries.lock().unwrap().insert(key, json);
        }
    }

    /// Discard one entry so the next read refetches.
    pub fn invalidate(&self, key: QueryKey) {
        self.entries.lock().unwrap().remove(&key);
    }

    /// Discard everything. Used by logout.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    pub fn contains(&self, key: QueryKey) -> bool {
        self.entries.lock().unwrap().contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, UserIdentity};

    fn sample_task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: None,
            completed,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_typed_roundtrip() {
        let cache = QueryCache::new();
        assert!(cache.get::<Vec<Task>>(QueryKey::Tasks).is_none());

        let tasks = vec![sample_task("1", false), sample_task("2", true)];
        cache.put(QueryKey::Tasks, &tasks);

        let loaded: Vec<Task> = cache.get(QueryKey::Tasks).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_invalidate_discards_only_that_key() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Tasks, &vec![sample_task("1", false)]);
        cache.put(
            QueryKey::Session,
            &UserIdentity {
                id: "u".into(),
                email: "u@example.com".into(),
                created_at: "2024-01-01T00:00:00Z".into(),
            },
        );

        cache.invalidate(QueryKey::Tasks);

        assert!(!cache.contains(QueryKey::Tasks));
        assert!(cache.contains(QueryKey::Session));
    }

    #[test]
    fn test_clear_discards_everything() {
        let cache = QueryCache::new();
        cache.put(QueryKey::Tasks, &vec![sample_task("1", false)]);
        cache.put(QueryKey::Students, &Vec::<crate::models::Student>::new());

        cache.clear();

        assert!(!cache.contains(QueryKey::Tasks));
        assert!(!cache.contains(QueryKey::Students));
        assert!(!cache.contains(QueryKey::Session));
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = QueryCache::new();
        let view = cache.clone();
        cache.put(QueryKey::Tasks, &vec![sample_task("1", false)]);
        assert!(view.contains(QueryKey::Tasks));
    }
}
