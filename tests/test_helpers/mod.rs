//! Shared helpers for integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that applies scoped environment variable updates and restores the
/// previous values on drop.
pub struct EnvVarGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets (`Some`) or removes (`None`) each variable for the guard
    /// lifetime.
    pub fn set_many(changes: &[(&'static str, Option<&str>)]) -> Self {
        let lock = env_lock();
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push((*key, env::var(key).ok()));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(key, previous),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Uniquely named directory under the system temp dir, removed with its
/// contents on drop.
pub struct TempDir {
    parent: Dir,
    name: String,
    path: Utf8PathBuf,
}

impl TempDir {
    /// Absolute path of the directory.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if let Err(e) = self.parent.remove_dir_all(&self.name) {
            eprintln!("Warning: failed to remove temp dir {}: {e}", self.path);
        }
    }
}

/// Creates a fresh, uniquely named directory under the system temp dir.
pub fn create_temp_dir(prefix: &str) -> Result<TempDir, std::io::Error> {
    let base = Utf8PathBuf::try_from(env::temp_dir()).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("temp directory path is not valid UTF-8: {e}"),
        )
    })?;
    let name = format!("{prefix}_{}", uuid::Uuid::new_v4());
    let parent = Dir::open_ambient_dir(&base, ambient_authority())?;
    parent.create_dir(&name)?;
    Ok(TempDir {
        path: base.join(&name),
        parent,
        name,
    })
}
