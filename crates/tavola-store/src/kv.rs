//! Key-value store wrapper with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A durable key-value storage surface.
///
/// Values are opaque strings; typed access lives on [`Store`]. The
/// contract is read-after-write within a session: a `get` after a
/// successful `set` on the same handle observes the written value.
pub trait StoreBackend {
    /// Read the value at `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value at `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory backend.
///
/// Cloning yields a handle to the same underlying map, so separate
/// [`Store`] instances built from clones observe each other's writes
/// the way two tabs sharing browser storage would.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Check whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl StoreBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Backend that accepts reads but rejects every write.
///
/// Used to exercise write-failure handling in consumers that must
/// keep their in-memory state authoritative when persistence fails.
#[derive(Clone, Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }
}

impl StoreBackend for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(format!("write rejected: {key}")))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(format!("delete rejected: {key}")))
    }
}

/// Type-safe store over a [`StoreBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap and shares the
/// backend.
#[derive(Clone)]
pub struct Store {
    backend: Rc<dyn StoreBackend>,
}

impl Store {
    /// Wrap a backend.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tavola_store::{MemoryStore, Store};
    /// let store = Store::new(MemoryStore::new());
    /// ```
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Get a value, deserialized from JSON.
    ///
    /// Returns `None` if the key doesn't exist. An unparseable stored
    /// value is a [`StoreError::Serialize`]; callers decide whether
    /// that is fatal or recoverable.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value, serialized to JSON.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.backend.exists(key)
    }
}

/// Helper to build namespaced store keys.
///
/// # Example
///
/// ```rust
/// use tavola_store::store_key;
/// let key = store_key!("cart", "sess_abc");
/// assert_eq!(key, "cart:sess_abc");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Snapshot {
        rows: Vec<String>,
    }

    #[test]
    fn test_set_then_get() {
        let store = Store::new(MemoryStore::new());
        let snap = Snapshot {
            rows: vec!["a".into(), "b".into()],
        };
        store.set("snap:1", &snap).unwrap();
        let back: Option<Snapshot> = store.get("snap:1").unwrap();
        assert_eq!(back, Some(snap));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = Store::new(MemoryStore::new());
        let back: Option<Snapshot> = store.get("nope").unwrap();
        assert!(back.is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let store = Store::new(MemoryStore::new());
        store.set("k", &1i64).unwrap();
        store.set("k", &2i64).unwrap();
        assert_eq!(store.get::<i64>("k").unwrap(), Some(2));
    }

    #[test]
    fn test_delete() {
        let store = Store::new(MemoryStore::new());
        store.set("k", &1i64).unwrap();
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
        // Deleting again is not an error.
        store.delete("k").unwrap();
    }

    #[test]
    fn test_unparseable_value_is_serialize_error() {
        let backend = MemoryStore::new();
        backend.set("snap:1", "{not json").unwrap();
        let store = Store::new(backend);
        let err = store.get::<Snapshot>("snap:1").unwrap_err();
        assert!(matches!(err, StoreError::Serialize(_)));
    }

    #[test]
    fn test_cloned_memory_store_shares_state() {
        let backend = MemoryStore::new();
        let a = Store::new(backend.clone());
        let b = Store::new(backend);
        a.set("k", &7i64).unwrap();
        assert_eq!(b.get::<i64>("k").unwrap(), Some(7));
    }

    #[test]
    fn test_failing_store_rejects_writes() {
        let store = Store::new(FailingStore::new());
        let err = store.set("k", &1i64).unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn test_store_key_macro() {
        assert_eq!(store_key!("cart", "abc"), "cart:abc");
        assert_eq!(store_key!("cart", "abc", 7), "cart:abc:7");
    }
}
