//! The persisted application state aggregate.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::account::{Account, AccountId, AccountRegistry};
use crate::settings::DesktopSettings;
use crate::{Error, Result};

/// The top-level persisted aggregate: desktop settings plus known logins.
///
/// The application process is the single writer; UI layers get read-only
/// views. The `saved`/`logins` field names are part of the on-disk contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// The desktop settings record.
    #[serde(default)]
    pub saved: DesktopSettings,
    /// All known logins.
    #[serde(default)]
    pub logins: AccountRegistry,
}

impl AppState {
    /// Mark an account as the most recently active one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAccount`] if the account is not registered;
    /// the previous value is kept.
    pub fn set_last_account(&mut self, id: AccountId) -> Result<()> {
        if !self.logins.contains(id) {
            return Err(Error::UnknownAccount(id));
        }
        self.saved.last_account = Some(id);
        Ok(())
    }

    /// Insert or replace an account by identifier.
    pub fn upsert_account(&mut self, account: Account) {
        self.logins.upsert(account);
    }

    /// Remove an account and everything that points at it.
    ///
    /// If the removed account was the last active one, the most recently
    /// added remaining account takes its place, or the pointer is cleared
    /// when none remain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAccount`] if the account is not registered.
    pub fn remove_account(&mut self, id: AccountId) -> Result<Account> {
        let removed = self.logins.remove(id).ok_or(Error::UnknownAccount(id))?;
        self.saved.last_chats.remove(&id);
        if self.saved.last_account == Some(id) {
            self.saved.last_account = self.logins.latest().map(Account::id);
        }
        Ok(removed)
    }

    /// Remember the last viewed chat for an account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAccount`] if the account is not registered,
    /// keeping the `lastChats` keys consistent with the registry.
    pub fn record_last_chat(&mut self, account_id: AccountId, chat_id: u32) -> Result<()> {
        if !self.logins.contains(account_id) {
            return Err(Error::UnknownAccount(account_id));
        }
        self.saved.last_chats.insert(account_id, chat_id);
        Ok(())
    }

    /// Drop settings entries that reference accounts not in the registry.
    ///
    /// Runs after load; the type system cannot enforce this invariant
    /// against hand-edited or partially written documents.
    pub(crate) fn prune_unknown_accounts(&mut self) {
        if let Some(last) = self.saved.last_account
            && !self.logins.contains(last)
        {
            warn!("dropping lastAccount {last}: not in the account registry");
            self.saved.last_account = None;
        }
        let before = self.saved.last_chats.len();
        let logins = &self.logins;
        self.saved.last_chats.retain(|id, _| logins.contains(*id));
        let dropped = before - self.saved.last_chats.len();
        if dropped > 0 {
            warn!("dropped {dropped} lastChats entries for unknown accounts");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unconfigured(id: u32) -> Account {
        Account::Unconfigured {
            id: AccountId::new(id),
        }
    }

    #[test]
    fn set_last_account_requires_known_id() {
        let mut state = AppState::default();
        let err = state.set_last_account(AccountId::new(9)).unwrap_err();
        assert!(matches!(err, Error::UnknownAccount(id) if id == AccountId::new(9)));
        assert!(state.saved.last_account.is_none());

        state.upsert_account(unconfigured(9));
        state.set_last_account(AccountId::new(9)).unwrap();
        assert_eq!(state.saved.last_account, Some(AccountId::new(9)));
    }

    #[test]
    fn failed_set_last_account_keeps_previous_value() {
        let mut state = AppState::default();
        state.upsert_account(unconfigured(1));
        state.set_last_account(AccountId::new(1)).unwrap();
        assert!(state.set_last_account(AccountId::new(2)).is_err());
        assert_eq!(state.saved.last_account, Some(AccountId::new(1)));
    }

    #[test]
    fn remove_only_account_clears_last_account() {
        let mut state = AppState::default();
        state.upsert_account(unconfigured(1));
        state.set_last_account(AccountId::new(1)).unwrap();
        state.record_last_chat(AccountId::new(1), 1001).unwrap();

        state.remove_account(AccountId::new(1)).unwrap();
        assert!(state.saved.last_account.is_none());
        assert!(state.logins.is_empty());
        assert!(state.saved.last_chats.is_empty());
    }

    #[test]
    fn remove_last_account_reassigns_to_most_recently_added() {
        let mut state = AppState::default();
        state.upsert_account(unconfigured(1));
        state.upsert_account(unconfigured(2));
        state.upsert_account(unconfigured(3));
        state.set_last_account(AccountId::new(1)).unwrap();

        state.remove_account(AccountId::new(1)).unwrap();
        assert_eq!(state.saved.last_account, Some(AccountId::new(3)));
    }

    #[test]
    fn remove_other_account_keeps_last_account() {
        let mut state = AppState::default();
        state.upsert_account(unconfigured(1));
        state.upsert_account(unconfigured(2));
        state.set_last_account(AccountId::new(1)).unwrap();

        state.remove_account(AccountId::new(2)).unwrap();
        assert_eq!(state.saved.last_account, Some(AccountId::new(1)));
    }

    #[test]
    fn remove_unknown_account_fails() {
        let mut state = AppState::default();
        assert!(matches!(
            state.remove_account(AccountId::new(1)),
            Err(Error::UnknownAccount(_))
        ));
    }

    #[test]
    fn record_last_chat_requires_known_account() {
        let mut state = AppState::default();
        assert!(state.record_last_chat(AccountId::new(1), 7).is_err());

        state.upsert_account(unconfigured(1));
        state.record_last_chat(AccountId::new(1), 7).unwrap();
        state.record_last_chat(AccountId::new(1), 8).unwrap();
        assert_eq!(state.saved.last_chats.get(&AccountId::new(1)), Some(&8));
    }

    #[test]
    fn prune_drops_dangling_references() {
        let mut state = AppState::default();
        state.upsert_account(unconfigured(1));
        state.saved.last_account = Some(AccountId::new(5));
        state.saved.last_chats.insert(AccountId::new(1), 10);
        state.saved.last_chats.insert(AccountId::new(5), 11);

        state.prune_unknown_accounts();
        assert!(state.saved.last_account.is_none());
        assert_eq!(state.saved.last_chats.len(), 1);
        assert!(state.saved.last_chats.contains_key(&AccountId::new(1)));
    }

    #[test]
    fn wire_shape_has_saved_and_logins() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("saved"));
        assert!(object.contains_key("logins"));
        assert_eq!(json["logins"], serde_json::json!([]));
    }
}
