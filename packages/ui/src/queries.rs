//! # Reactive query cache
//!
//! [`Queries`] pairs the shared [`QueryCache`] with one version counter per
//! [`QueryKey`]. Loaders read the counter for their key inside a reactive
//! scope, so bumping it is what actually triggers a refetch; the cache alone
//! is plain storage with no subscribers.
//!
//! Mutations call [`Queries::invalidate`], which drops the cached value and
//! bumps the counter in one step. Logout calls [`Queries::clear`], which
//! does the same for every key.

use std::collections::HashMap;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{QueryCache, QueryKey, UserIdentity};

/// Handle to the app-wide query cache. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Queries {
    cache: Signal<QueryCache>,
    versions: Signal<HashMap<QueryKey, u64>>,
}

impl Queries {
    /// Current version counter for `key`. Reading this inside a reactive
    /// scope subscribes it to future invalidations.
    pub fn version(&self, key: QueryKey) -> u64 {
        self.versions.read().get(&key).copied().unwrap_or(0)
    }

    /// Cached value for `key`, if present. Does not subscribe.
    pub fn get<T: DeserializeOwned>(&self, key: QueryKey) -> Option<T> {
        self.cache.peek().get(key)
    }

    /// Handle to the underlying cache; clones share the same entries.
    /// Callers that mutate through it still need [`Queries::invalidate`] or
    /// [`Queries::clear`] to wake subscribers.
    pub fn cache(&self) -> QueryCache {
        self.cache.peek().clone()
    }

    /// Store a fresh value for `key` without waking subscribers.
    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T) {
        self.cache.peek().put(key, value);
    }

    /// Drop the cached value for `key` and wake its subscribers.
    pub fn invalidate(&mut self, key: QueryKey) {
        self.cache.peek().invalidate(key);
        self.bump(key);
    }

    /// The cached session identity, if any.
    pub fn session(&self) -> Option<UserIdentity> {
        self.get(QueryKey::Session)
    }

    /// Cache the session identity and wake session subscribers.
    pub fn set_session(&mut self, user: &UserIdentity) {
        self.put(QueryKey::Session, user);
        self.bump(QueryKey::Session);
    }

    /// Empty the whole cache and wake every subscriber. Used on logout so no
    /// stale per-user data survives into the next session.
    pub fn clear(&mut self) {
        self.cache.peek().clear();
        for key in [QueryKey::Session, QueryKey::Tasks, QueryKey::Students] {
            self.bump(key);
        }
    }

    fn bump(&mut self, key: QueryKey) {
        let mut versions = self.versions;
        *versions.write().entry(key).or_insert(0) += 1;
    }
}

/// The [`Queries`] handle provided by [`QueryProvider`].
pub fn use_queries() -> Queries {
    use_context()
}

/// Owns the query cache for the component tree below it.
#[component]
pub fn QueryProvider(children: Element) -> Element {
    let cache = use_signal(QueryCache::new);
    let versions = use_signal(HashMap::new);
    use_context_provider(|| Queries { cache, versions });

    rsx! {
        {children}
    }
}
