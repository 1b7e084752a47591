//! File-backed store for the application state.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::state::{AppState, migration};
use crate::{Error, Result};

/// Loads and saves the [`AppState`] aggregate as a JSON document.
///
/// The aggregate is always written whole. Saving goes through a sibling
/// temp file followed by a rename, so a crash mid-write never leaves a
/// half-written document for the next load.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional per-user location of the state document.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deskchat")
            .join("config.json")
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state.
    ///
    /// A missing document yields a default-populated state with an empty
    /// registry. After parsing, the legacy credentials migration runs and
    /// dangling account references are pruned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] if the document cannot be parsed and
    /// [`Error::StorageRead`] if it cannot be read at all. Callers that must
    /// not fail use [`StateStore::load_or_default`].
    pub async fn load(&self) -> Result<AppState> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no state document at {:?}, starting from defaults", self.path);
                return Ok(AppState::default());
            }
            Err(e) => return Err(Error::StorageRead(e)),
        };

        let mut state: AppState = serde_json::from_str(&contents)?;
        migration::migrate_legacy_credentials(&mut state);
        state.prune_unknown_accounts();
        Ok(state)
    }

    /// Load the persisted state, substituting defaults on any failure.
    pub async fn load_or_default(&self) -> AppState {
        match self.load().await {
            Ok(state) => state,
            Err(e) => {
                warn!("falling back to default state: {e}");
                AppState::default()
            }
        }
    }

    /// Persist the full aggregate atomically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`] on I/O failure; the caller's
    /// in-memory state stays the source of truth and the save may be
    /// retried.
    pub async fn save(&self, state: &AppState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(Error::StorageWrite)?;
        }

        let contents = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(Error::StorageWrite)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(Error::StorageWrite)?;

        debug!("state saved to {:?}", self.path);
        Ok(())
    }
}
