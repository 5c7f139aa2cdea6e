//! On-disk cache for the index and documents
//!
//! One file per key inside a single directory. Entries never expire; a
//! cached file is trusted until it is removed with `rfcs cache clear`.
//! Writes go through a temp file and a rename so that a concurrent reader
//! sees either the old or the new content.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache directory is unavailable")]
    Unavailable,

    #[error("Cache IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CacheError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Key to bytes persistence
pub trait CacheStore {
    /// Reads an entry, `Ok(None)` when it is not cached
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Writes an entry, replacing any previous content
    fn put(&self, key: &str, content: &[u8]) -> Result<(), CacheError>;
}

impl<T: CacheStore + ?Sized> CacheStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, content: &[u8]) -> Result<(), CacheError> {
        (**self).put(key, content)
    }
}

/// Cache backed by a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct DirCache {
    dir: Option<PathBuf>,
}

impl DirCache {
    /// Creates a cache rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Creates a cache with no directory; every operation fails
    pub fn unavailable() -> Self {
        Self { dir: None }
    }

    /// Returns the cache directory, if one was resolved
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    fn dir(&self) -> Result<&Path, CacheError> {
        self.dir.as_deref().ok_or(CacheError::Unavailable)
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        Ok(self.dir()?.join(key))
    }

    /// Removes an entry, returning whether it existed
    pub fn remove(&self, key: &str) -> Result<bool, CacheError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::io(&path, e)),
        }
    }

    /// Lists the keys of regular files in the cache directory, sorted
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        let dir = self.dir()?;
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::io(dir, e)),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CacheError::io(dir, e))?;
            let is_file = entry
                .file_type()
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

impl CacheStore for DirCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::io(&path, e)),
        }
    }

    fn put(&self, key: &str, content: &[u8]) -> Result<(), CacheError> {
        let dir = self.dir()?;
        fs::create_dir_all(dir).map_err(|e| CacheError::io(dir, e))?;

        let path = dir.join(key);
        let temp_path = dir.join(format!(".{key}.tmp"));

        {
            let mut file = File::create(&temp_path).map_err(|e| CacheError::io(&temp_path, e))?;
            file.write_all(content)
                .and_then(|()| file.flush())
                .map_err(|e| CacheError::io(&temp_path, e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|e| CacheError::io(&path, e))
    }
}
