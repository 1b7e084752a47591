//! Account model types.

use serde::{Deserialize, Serialize};

/// Unique identifier for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl AccountId {
    /// Create a new account ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One known login within the messaging engine.
///
/// An account starts out unconfigured and becomes configured exactly once,
/// when the engine completes its setup; it never reverts. The two-case
/// `type` discriminator (`unconfigured`/`configured`) is part of the on-disk
/// contract and must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Account {
    /// A login that has been added but not yet set up by the engine.
    Unconfigured {
        /// Stable account identifier.
        id: AccountId,
    },
    /// A fully set-up login.
    Configured {
        /// Stable account identifier.
        id: AccountId,
        /// User-chosen display name, if any.
        display_name: Option<String>,
        /// E-mail address of the account.
        addr: Option<String>,
        /// Path to the profile image, if one is set.
        profile_image: Option<String>,
        /// Identity color as a `#rrggbb` string.
        color: String,
    },
}

impl Account {
    /// The stable identifier of this account.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        match self {
            Self::Unconfigured { id } | Self::Configured { id, .. } => *id,
        }
    }

    /// Whether the engine has completed setup for this account.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self, Self::Configured { .. })
    }
}
