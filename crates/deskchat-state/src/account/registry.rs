//! Registry of known accounts.

use serde::{Deserialize, Serialize};

use super::model::{Account, AccountId};

/// The set of known logins, keyed by unique account identifier.
///
/// Insertion order is preserved so "most recently added" is well defined,
/// but order carries no meaning on disk (`logins` is an ordered-irrelevant
/// array in the persisted document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Insert or replace an account by identifier.
    ///
    /// Replacing is idempotent and keeps the entry's position; the common
    /// case is an unconfigured entry becoming configured under the same id.
    pub fn upsert(&mut self, account: Account) {
        if let Some(existing) = self
            .accounts
            .iter_mut()
            .find(|a| a.id() == account.id())
        {
            *existing = account;
        } else {
            self.accounts.push(account);
        }
    }

    /// Remove an account, returning it if it was present.
    pub fn remove(&mut self, id: AccountId) -> Option<Account> {
        let index = self.accounts.iter().position(|a| a.id() == id)?;
        Some(self.accounts.remove(index))
    }

    /// Look up an account by identifier.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == id)
    }

    /// Whether an account with the given identifier is registered.
    #[must_use]
    pub fn contains(&self, id: AccountId) -> bool {
        self.get(id).is_some()
    }

    /// The most recently added account, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Account> {
        self.accounts.last()
    }

    /// The next free identifier: one past the highest known id.
    #[must_use]
    pub fn next_id(&self) -> AccountId {
        let max = self.accounts.iter().map(|a| a.id().0).max().unwrap_or(0);
        AccountId::new(max + 1)
    }

    /// Iterate over all accounts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a AccountRegistry {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}
