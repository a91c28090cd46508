//! String key-value store and the typed collection handles built on top of it.
//!
//! Every domain collection is one key holding a JSON array. Reads and writes
//! are whole-collection: `load` parses the full array, `save` rewrites it.
//! There is no append log, diffing, or partial update, and no optimistic
//! concurrency check across handles sharing a store.

use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Well-known collection keys. Versioned so a breaking record-shape change can
/// roll over to a fresh key without migrating old payloads.
pub mod keys {
    pub const BRANCHES: &str = "BRANCHES_CACHE_V1";
    pub const ASSETS: &str = "ASSETS_CACHE_V1";
    pub const VENDORS: &str = "VENDORS_CACHE_V1";
    pub const WORK_ORDERS: &str = "WORK_ORDERS_CACHE_V1";
    pub const ECG_BILLS: &str = "ECG_BILLS_CACHE_V1";
    pub const WATER_BILLS: &str = "WATER_BILLS_CACHE_V1";
    pub const FUEL_LOGS: &str = "FUEL_LOGS_CACHE_V1";
    pub const REORDER_REQUESTS: &str = "REORDER_REQUESTS_CACHE_V1";
    pub const USERS: &str = "USERS_CACHE_V1";
}

/// Storage abstraction: a synchronous string-to-string map.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Mutex-guarded map used by the service by default and as the test fake. The
/// lock exists for `Sync`; it does not add cross-request transactionality.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

/// One file per key under a profile directory, so the CLI keeps collections
/// between runs.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Typed handle binding a store to one well-known collection key.
pub struct Collection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Load the whole collection. A missing key is an empty collection; a
    /// corrupt payload is logged and resets the collection to empty rather
    /// than failing the caller.
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.store.get(self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(key = self.key, %err, "discarding unparseable collection payload");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and overwrite the whole collection under its key.
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records).map_err(StoreError::Serialize)?;
        self.store.set(self.key, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: String,
        amount: f64,
        flagged: bool,
    }

    fn samples() -> Vec<Sample> {
        vec![
            Sample {
                id: "a-1".to_string(),
                amount: 120.5,
                flagged: false,
            },
            Sample {
                id: "a-2".to_string(),
                amount: 0.0,
                flagged: true,
            },
        ]
    }

    #[test]
    fn round_trip_is_a_faithful_echo() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let collection = Collection::<Sample>::new(store, "SAMPLES_CACHE_V1");

        let records = samples();
        collection.save(&records).expect("save succeeds");
        let loaded = collection.load().expect("load succeeds");

        assert_eq!(loaded, records);
    }

    #[test]
    fn missing_key_loads_empty() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let collection = Collection::<Sample>::new(store, "SAMPLES_CACHE_V1");

        assert!(collection.load().expect("load succeeds").is_empty());
    }

    #[test]
    fn corrupt_payload_resets_to_empty() {
        let store = Arc::new(InMemoryStore::default());
        store
            .set("SAMPLES_CACHE_V1", "{not json".to_string())
            .expect("set succeeds");

        let collection =
            Collection::<Sample>::new(store as Arc<dyn KeyValueStore>, "SAMPLES_CACHE_V1");
        assert!(collection.load().expect("load succeeds").is_empty());
    }

    #[test]
    fn last_write_wins_across_handles() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let first = Collection::<Sample>::new(store.clone(), "SAMPLES_CACHE_V1");
        let second = Collection::<Sample>::new(store, "SAMPLES_CACHE_V1");

        first.save(&samples()).expect("save succeeds");
        second.save(&samples()[..1]).expect("save succeeds");

        assert_eq!(first.load().expect("load succeeds").len(), 1);
    }
}
