//! JSON value helpers over the persistent key-value store.
//!
//! Values round-trip through `serde_json`, so anything serializable can be
//! stored. Failures never raise: reads degrade to the caller's default,
//! writes report `false`, and every failure is surfaced through the sink.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::traits::{KeyValueStore, LogSink};

/// Read and JSON-decode `key`, falling back to `default` when the key is
/// absent, unreadable, or holds something that does not decode.
pub fn get_storage<S, L, T>(store: &S, sink: &L, key: &str, default: T) -> T
where
    S: KeyValueStore,
    L: LogSink,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn_failed(sink, "get", key, &err.to_string());
            return default;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn_failed(sink, "get", key, &err.to_string());
            default
        }
    }
}

/// JSON-encode `value` and write it under `key`. Reports whether the write
/// succeeded.
pub fn set_storage<S, L, T>(store: &S, sink: &L, key: &str, value: &T) -> bool
where
    S: KeyValueStore,
    L: LogSink,
    T: Serialize + ?Sized,
{
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn_failed(sink, "set", key, &err.to_string());
            return false;
        }
    };
    match store.set(key, &encoded) {
        Ok(()) => true,
        Err(err) => {
            // Quota and privacy-mode failures land here.
            warn_failed(sink, "set", key, &err.to_string());
            false
        }
    }
}

/// Delete `key`. Failures are reported through the sink and swallowed.
pub fn remove_storage<S, L>(store: &S, sink: &L, key: &str)
where
    S: KeyValueStore,
    L: LogSink,
{
    if let Err(err) = store.remove(key) {
        warn_failed(sink, "remove", key, &err.to_string());
    }
}

pub(crate) fn warn_failed<L: LogSink>(sink: &L, verb: &str, key: &str, detail: &str) {
    sink.warn(
        &format!("Failed to {} storage item: {}", verb, key),
        Some(detail),
    );
}

/// In-memory [`KeyValueStore`]. The native stand-in for localStorage and the
/// default backing for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
