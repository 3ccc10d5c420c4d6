//! File-backed token slot for the command line.
//!
//! The token lives in a single file (default `<config dir>/facerec/auth_token`)
//! holding nothing but the token text.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use auth::{StorageError, TOKEN_STORAGE_KEY, TokenStore};

const APP_DIR: &str = "facerec";

/// Default token path, or `None` when the platform has no config or home
/// directory.
pub fn default_token_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join(TOKEN_STORAGE_KEY))
        .or_else(|| dirs::home_dir().map(|d| d.join(format!(".{APP_DIR}")).join(TOKEN_STORAGE_KEY)))
}

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write the token into a file that is owner-only from the moment it exists.
/// A pre-existing file is narrowed before the new token goes in.
#[cfg(unix)]
fn write_token(path: &Path, token: &str) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(token.as_bytes())
}

#[cfg(not(unix))]
fn write_token(path: &Path, token: &str) -> io::Result<()> {
    fs::write(path, token)
}

fn io_error(err: io::Error) -> StorageError {
    StorageError::Io(err.to_string())
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        write_token(&self.path, token).map_err(io_error)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}
