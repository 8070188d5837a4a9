//! Store port - durable key-value storage
//!
//! The store is the whole persistence boundary: every value is a string,
//! and structured values are JSON documents written as a whole.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::result::Result;

/// Key-value storage abstraction
///
/// Implementations (adapters) decide where the values live. Writes must be
/// durable once the call returns `Ok`.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted
    fn keys(&self) -> Result<Vec<String>>;
}

/// Read and decode a JSON value stored under `key`
pub fn load_json<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`
pub fn save_json<T: Serialize + ?Sized>(store: &dyn Store, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
