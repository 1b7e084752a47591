//! Single-writer facade over the persisted state.

use tracing::warn;

use crate::account::{Account, AccountId};
use crate::settings::{DesktopSettings, WindowBounds};
use crate::state::{AppState, StateStore};
use crate::Result;

/// The settings and account registry: owns the [`AppState`] aggregate and
/// persists it after every mutation.
///
/// Mutations take `&mut self`, which serializes writers at the type level;
/// at most one save is in flight at a time. Mutations apply in memory first
/// and are kept even when the save fails, so the in-memory aggregate stays
/// the source of truth and the caller can retry with [`SettingsRegistry::flush`].
#[derive(Debug)]
pub struct SettingsRegistry {
    store: StateStore,
    state: AppState,
}

impl SettingsRegistry {
    /// Open the registry, loading persisted state from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted document exists but cannot be read
    /// or parsed.
    pub async fn open(store: StateStore) -> Result<Self> {
        let state = store.load().await?;
        Ok(Self { store, state })
    }

    /// Open the registry, substituting defaults if the document is corrupt.
    pub async fn open_or_default(store: StateStore) -> Self {
        let state = store.load_or_default().await;
        Self { store, state }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Read-only view of the desktop settings.
    #[must_use]
    pub const fn settings(&self) -> &DesktopSettings {
        &self.state.saved
    }

    /// Mark an account as the most recently active one and persist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownAccount`] without touching storage if
    /// the account is not registered, or [`crate::Error::StorageWrite`] if
    /// persisting fails.
    pub async fn set_last_account(&mut self, id: AccountId) -> Result<()> {
        self.state.set_last_account(id)?;
        self.persist().await
    }

    /// Insert or replace an account and persist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageWrite`] if persisting fails.
    pub async fn upsert_account(&mut self, account: Account) -> Result<()> {
        self.state.upsert_account(account);
        self.persist().await
    }

    /// Remove an account and persist, returning the removed entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownAccount`] without touching storage if
    /// the account is not registered, or [`crate::Error::StorageWrite`] if
    /// persisting fails.
    pub async fn remove_account(&mut self, id: AccountId) -> Result<Account> {
        let removed = self.state.remove_account(id)?;
        self.persist().await?;
        Ok(removed)
    }

    /// Remember the last viewed chat for an account and persist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownAccount`] without touching storage if
    /// the account is not registered, or [`crate::Error::StorageWrite`] if
    /// persisting fails.
    pub async fn record_last_chat(&mut self, account_id: AccountId, chat_id: u32) -> Result<()> {
        self.state.record_last_chat(account_id, chat_id)?;
        self.persist().await
    }

    /// Update the window placement (host notification) and persist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageWrite`] if persisting fails.
    pub async fn set_bounds(&mut self, bounds: Option<WindowBounds>) -> Result<()> {
        self.state.saved.bounds = bounds;
        self.persist().await
    }

    /// Apply an arbitrary settings change and persist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageWrite`] if persisting fails.
    pub async fn update_settings<F>(&mut self, update: F) -> Result<()>
    where
        F: FnOnce(&mut DesktopSettings),
    {
        update(&mut self.state.saved);
        self.persist().await
    }

    /// Write the current in-memory state to storage.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageWrite`] if persisting fails.
    pub async fn flush(&self) -> Result<()> {
        self.store.save(&self.state).await
    }

    async fn persist(&self) -> Result<()> {
        let result = self.flush().await;
        if let Err(e) = &result {
            warn!("state change kept in memory only: {e}");
        }
        result
    }
}
