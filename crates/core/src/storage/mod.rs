//! Local persistence.
//!
//! Everything Clay Market persists is a JSON document stored under a string
//! key in a [`KeyValueStore`], in the spirit of browser local storage:
//!
//! | Key | Store | Value |
//! |-----|-------|-------|
//! | `products` | local | JSON array of [`Product`](crate::Product) |
//! | `orders` | local | JSON array of [`Order`](crate::Order) |
//! | `adminAuth` | session | `"true"` while the admin is logged in |
//!
//! Collections are always read and written whole. There is no locking, so
//! two processes sharing one data directory race with last-write-wins
//! semantics.
//!
//! Reads never fail from the caller's point of view: a missing, unreadable,
//! or malformed value is logged and treated as empty. Writes do return
//! errors, so callers can avoid dropping state they failed to persist.

mod file;
mod memory;
pub mod orders;
pub mod products;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use orders::OrderRepository;
pub use products::ProductRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys.
pub mod keys {
    /// Product catalog, in the local store.
    pub const PRODUCTS: &str = "products";

    /// Submitted orders, in the local store.
    pub const ORDERS: &str = "orders";

    /// Admin login flag, in the session store.
    pub const ADMIN_SESSION: &str = "adminAuth";
}

/// Errors that can occur in a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters the backend cannot store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend's internal lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string key-value store.
///
/// Implementations replace values whole; a reader sees either the previous
/// value or the new one.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a JSON array, treating anything unusable as empty.
///
/// Records that do not match `T` are skipped one by one, so a single bad
/// entry does not hide the rest of the collection.
pub(crate) fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Vec<T> {
    let records = match read_raw_records(store, key) {
        Ok(Some(records)) => records,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored collection is unusable, treating as empty");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "Skipping malformed stored record");
                None
            }
        })
        .collect()
}

/// Read a JSON array without interpreting its records.
///
/// Returns `Ok(None)` if nothing is stored under `key`.
pub(crate) fn read_raw_records(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Vec<serde_json::Value>>, StorageError> {
    store
        .get(key)?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(StorageError::from)
}

/// Replace a JSON array wholesale.
pub(crate) fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// Whether a key is safe to use as a file name on every platform.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key(keys::PRODUCTS));
        assert!(is_valid_key(keys::ADMIN_SESSION));
        assert!(is_valid_key("cart_v2-backup"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("../etc/passwd"));
        assert!(!is_valid_key("a b"));
    }

    #[test]
    fn test_read_collection_missing_is_empty() {
        let store = MemoryStore::new();
        let items: Vec<u32> = read_collection(&store, "numbers");
        assert!(items.is_empty());
    }

    #[test]
    fn test_read_collection_malformed_is_empty() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        let items: Vec<u32> = read_collection(&store, "numbers");
        assert!(items.is_empty());

        store.set("numbers", "{\"a\": 1}").unwrap();
        let items: Vec<u32> = read_collection(&store, "numbers");
        assert!(items.is_empty());
    }

    #[test]
    fn test_read_collection_skips_bad_records() {
        let store = MemoryStore::new();
        store.set("numbers", "[1, \"two\", 3, null]").unwrap();
        let items: Vec<u32> = read_collection(&store, "numbers");
        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn test_read_raw_records() {
        let store = MemoryStore::new();
        assert!(read_raw_records(&store, "numbers").unwrap().is_none());

        store.set("numbers", "[1, {\"x\": 2}]").unwrap();
        assert_eq!(read_raw_records(&store, "numbers").unwrap().unwrap().len(), 2);

        store.set("numbers", "{not json").unwrap();
        assert!(matches!(
            read_raw_records(&store, "numbers"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_write_then_read_collection() {
        let store = MemoryStore::new();
        write_collection(&store, "numbers", &[3_u32, 1, 2]).unwrap();
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[3,1,2]"));

        let items: Vec<u32> = read_collection(&store, "numbers");
        assert_eq!(items, vec![3, 1, 2]);
    }
}
