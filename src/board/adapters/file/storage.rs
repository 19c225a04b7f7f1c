//! Directory-backed key-value storage.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Mutex;

use super::key::file_name_for;
use crate::board::ports::{KeyValueStorage, StorageError, StorageKey, StorageResult};

const TEMP_SUFFIX: &str = ".tmp";

/// Stores each key as one file inside a directory.
///
/// All access goes through a capability handle for the storage directory,
/// so keys can never address files outside it. Writes land in a temporary
/// sibling file that is then renamed over the target, which keeps a reader
/// from ever observing a half-written value.
#[derive(Debug)]
pub struct FileStorage {
    root: Utf8PathBuf,
    dir: Dir,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root_path = root.as_ref();
        Dir::create_ambient_dir_all(root_path, ambient_authority())
            .map_err(StorageError::persistence)?;
        let dir = Dir::open_ambient_dir(root_path, ambient_authority())
            .map_err(StorageError::persistence)?;
        tracing::debug!(root = %root_path, "opened file storage");
        Ok(Self {
            root: root_path.to_owned(),
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the path of the file holding `key`.
    #[must_use]
    pub fn path_for(&self, key: &StorageKey) -> Utf8PathBuf {
        self.root.join(file_name_for(key))
    }

    fn lock_writes(&self) -> StorageResult<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|err| StorageError::persistence(io::Error::other(err.to_string())))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        match self.dir.read_to_string(file_name_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::persistence(err)),
        }
    }

    fn set(&self, key: &StorageKey, value: &str) -> StorageResult<()> {
        let _guard = self.lock_writes()?;
        let file_name = file_name_for(key);
        let temp_name = format!("{file_name}{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(StorageError::persistence)?;
        if let Err(err) = self.dir.rename(&temp_name, &self.dir, &file_name) {
            if let Err(cleanup) = self.dir.remove_file(&temp_name) {
                tracing::warn!(key = %key, error = %cleanup, "failed to remove temporary storage file");
            }
            return Err(StorageError::persistence(err));
        }
        tracing::trace!(key = %key, bytes = value.len(), "wrote storage file");
        Ok(())
    }

    fn remove(&self, key: &StorageKey) -> StorageResult<()> {
        let _guard = self.lock_writes()?;
        match self.dir.remove_file(file_name_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::persistence(err)),
        }
    }
}
