//! JSON-file store standing in for browser local storage between CLI runs.
//! The whole map is rewritten on every change through a temporary file and a
//! rename. The file can hold a session token and a plaintext password, so it is
//! created owner-only on unix.

use super::{KeyValueStore, StorageError};
use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

type Entries = BTreeMap<String, String>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read(&self) -> Result<Entries, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let payload = serde_json::to_vec_pretty(entries).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("tmp");
        let mut file = open_private(&tmp).map_err(|err| self.io_error(err))?;
        file.write_all(&payload)
            .and_then(|()| file.sync_all())
            .map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))?;

        debug!(path = %self.path.display(), keys = entries.len(), "storage written");

        Ok(())
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<fs::File> {
    fs::File::create(path)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}
