//! Token store implementations
//!
//! - [`MemoryTokenStore`]: process-local slot behind a lock
//! - [`FileTokenStore`]: `session.json` in the LevelUp directory, so a
//!   login survives across CLI invocations

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::ports::TokenStore;

/// In-memory token slot
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already present
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .read()
            .map_err(|_| Error::storage("token lock poisoned"))?;
        Ok(guard.clone())
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| Error::storage("token lock poisoned"))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| Error::storage("token lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// On-disk session file layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    token: Option<String>,
}

/// Token slot persisted as a JSON file
///
/// Writers hold an exclusive advisory lock and readers a shared one, so
/// concurrent CLI processes never observe a half-written file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Session file inside a LevelUp directory
    pub fn in_dir(levelup_dir: &Path) -> Self {
        Self::new(levelup_dir.join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_write(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        FileExt::lock_exclusive(&file)?;
        Ok(file)
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Result<Option<String>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        FileExt::lock_shared(&file)?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;
        FileExt::unlock(&file)?;

        if content.trim().is_empty() {
            return Ok(None);
        }
        let session: SessionFile = serde_json::from_str(&content)
            .map_err(|e| Error::storage(format!("Corrupt session file {:?}: {}", self.path, e)))?;
        Ok(session.token)
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut file = self.open_for_write()?;
        let content = serde_json::to_vec_pretty(&SessionFile {
            token: Some(token.to_string()),
        })?;

        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&content)?;
        file.sync_all()?;
        FileExt::unlock(&file)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let file = self.open_for_write()?;
        file.set_len(0)?;
        FileExt::unlock(&file)?;
        drop(file);

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
