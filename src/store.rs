use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Generic in-memory map, safe to share across async handlers and
/// background tasks.
///
/// Cloning the handle is cheap and yields a view onto the same map.
/// Writers are exclusive against each other and against readers for the
/// duration of a single operation; readers may proceed concurrently.
/// There is no cross-operation transactional guarantee: a `get` racing a
/// `set` from another task may observe either the old or the new value,
/// but never a torn one.
pub struct MemStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for MemStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> MemStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> MemStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Insert or overwrite the entry for `key`. Always succeeds.
    pub fn set(&self, key: K, value: V) {
        self.inner.write().insert(key, value);
    }

    /// Current value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    /// Remove the entry for `key`. Returns whether an entry was removed.
    pub fn delete(&self, key: &K) -> bool {
        self.inner.write().remove(key).is_some()
    }

    /// Number of entries at the instant of the call.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<K, V> MemStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Independent point-in-time copy of all entries. Later mutations of
    /// the store do not affect a previously returned snapshot.
    pub fn snapshot(&self) -> HashMap<K, V> {
        self.inner.read().clone()
    }
}
