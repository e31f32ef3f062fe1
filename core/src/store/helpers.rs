use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;

use super::r#trait::KeyValueStore;

/// Reads a JSON entry, substituting `T::default()` when it is missing,
/// unreadable or malformed. Never fails.
pub fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(target: "osprey.store", store = store.name(), key, error = %e, "read failed, using defaults");
            return T::default();
        }
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(target: "osprey.store", store = store.name(), key, error = %e, "malformed entry, using defaults");
            T::default()
        }
    }
}

pub fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}
