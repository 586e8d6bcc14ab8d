//! Durable key/value storage for client state.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Fixed keys under which the durable parts of the client state are saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Signed-in user
    User,

    /// Cart lines
    Cart,

    /// Wishlist book ids
    Wishlist,

    /// Dark mode preference
    DarkMode,
}

impl StorageKey {
    /// The storage key string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "booknest_user",
            Self::Cart => "booknest_cart",
            Self::Wishlist => "booknest_wishlist",
            Self::DarkMode => "booknest_darkmode",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O failed for {key}: {source}")]
    Io {
        /// Key being accessed
        key: StorageKey,

        /// I/O error
        #[source]
        source: io::Error,
    },

    /// A value could not be encoded or decoded as JSON.
    #[error("invalid JSON for {key}: {source}")]
    Json {
        /// Key being accessed
        key: StorageKey,

        /// JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// A durable string store keyed by [`StorageKey`].
pub trait StateStorage {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be read.
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be written.
    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be written.
    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<StorageKey, String>,
}

impl MemoryStorage {
    /// Raw value for `key`, without going through the trait.
    #[must_use]
    pub fn get(&self, key: StorageKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key, value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.entries.remove(&key);

        Ok(())
    }
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key, source }),
        }
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io { key, source })?;

        // Readers see either the old value or the new one, never a partial write.
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|source| StorageError::Io { key, source })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { key, source })
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key, source }),
        }
    }
}
