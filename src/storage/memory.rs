use super::{KeyValueStore, StorageError};
use std::{collections::HashMap, sync::Mutex};

/// In-process store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() -> Result<(), StorageError> {
        let store = MemoryStore::new();
        assert_eq!(store.get("authToken")?, None);

        store.set("authToken", "QpwL5tke4Pnpja7X4")?;
        assert_eq!(store.get("authToken")?, Some("QpwL5tke4Pnpja7X4".to_string()));

        store.set("authToken", "replaced")?;
        assert_eq!(store.get("authToken")?, Some("replaced".to_string()));

        store.remove("authToken")?;
        store.remove("authToken")?;
        assert_eq!(store.get("authToken")?, None);
        Ok(())
    }
}
